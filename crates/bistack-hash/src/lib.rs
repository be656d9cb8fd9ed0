//! FNV-1a 64-bit hashing.
//!
//! Fast, deterministic, non-cryptographic. Suitable for content keys,
//! cache lookups, and cheap equality checks where the input is trusted.
//! [`hash_bytes`] and [`hash_str`] agree on equal byte content; an empty
//! input hashes to [`FNV_OFFSET`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::hash::{BuildHasherDefault, Hasher};

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
pub const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a(hash: u64, bytes: &[u8]) -> u64 {
    bytes.iter().fold(hash, |h, &b| fnv1a_byte(h, b))
}

/// Hash a byte slice.
pub fn hash_bytes(data: &[u8]) -> u64 {
    fnv1a(FNV_OFFSET, data)
}

/// Hash the UTF-8 bytes of `text`.
pub fn hash_str(text: &str) -> u64 {
    hash_bytes(text.as_bytes())
}

/// Hash NUL-terminated text: the bytes before the first NUL, or all of
/// `data` if it has none.
pub fn hash_nul_terminated(data: &[u8]) -> u64 {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    hash_bytes(&data[..end])
}

/// Incremental FNV-1a state implementing [`Hasher`].
///
/// Writes are concatenated, so feeding `b"ab"` then `b"c"` gives the same
/// result as [`hash_bytes(b"abc")`](hash_bytes). Note that the `Hash` impls
/// of std types may add length prefixes or separators of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fnv1a {
    hash: u64,
}

impl Fnv1a {
    /// A fresh state at the offset basis.
    pub fn new() -> Self {
        Self { hash: FNV_OFFSET }
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.hash = fnv1a(self.hash, bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

/// [`BuildHasher`](std::hash::BuildHasher) for `HashMap<K, V, BuildFnv1a>`.
pub type BuildFnv1a = BuildHasherDefault<Fnv1a>;
