//! Fisher–Yates shuffling driven by [`Pcg32`].
//!
//! Both entry points walk `i` from `len - 1` down to `1` and swap element `i`
//! with `j = uniform_u32(0, i + 1)`, so for the same generator state they
//! apply the same permutation and leave the generator in the same state.

use crate::pcg::Pcg32;

/// Shuffle `items` in place.
///
/// No-op (and no generator draws) for fewer than two elements.
///
/// # Panics
///
/// Panics if `items.len()` exceeds `u32::MAX`.
pub fn shuffle<T>(rng: &mut Pcg32, items: &mut [T]) {
    let len = items.len();
    assert!(
        u32::try_from(len).is_ok(),
        "shuffle supports at most u32::MAX elements (got {len})"
    );
    for i in (1..len).rev() {
        let j = rng.uniform_u32(0, i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

/// Shuffle a byte buffer of `element_size`-byte records in place.
///
/// For untyped regions such as arena allocations. Applies the same
/// permutation [`shuffle`] would apply to a slice of `bytes.len() /
/// element_size` elements.
///
/// # Panics
///
/// Panics if `element_size` is zero, if `bytes.len()` is not a multiple of
/// `element_size`, or if the element count exceeds `u32::MAX`.
pub fn shuffle_chunks(rng: &mut Pcg32, bytes: &mut [u8], element_size: usize) {
    assert!(element_size > 0, "element_size must be non-zero");
    assert!(
        bytes.len() % element_size == 0,
        "buffer length {} is not a multiple of element_size {element_size}",
        bytes.len()
    );
    let count = bytes.len() / element_size;
    assert!(
        u32::try_from(count).is_ok(),
        "shuffle supports at most u32::MAX elements (got {count})"
    );
    for i in (1..count).rev() {
        let j = rng.uniform_u32(0, i as u32 + 1) as usize;
        if i != j {
            let (head, tail) = bytes.split_at_mut(i * element_size);
            head[j * element_size..(j + 1) * element_size]
                .swap_with_slice(&mut tail[..element_size]);
        }
    }
}

impl Pcg32 {
    /// Method form of [`shuffle`].
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle(self, items)
    }
}
