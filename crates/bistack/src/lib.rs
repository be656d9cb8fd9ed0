//! bistack: scratch memory, deterministic random numbers, and hashing for
//! frame-driven applications.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! bistack sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use bistack::prelude::*;
//!
//! let mut temp = TempArena::default();
//! let mut rng = Pcg32::new(42);
//!
//! for frame in 0..3 {
//!     let roll = rng.uniform_u32(1, 7);
//!     let label = temp_format!(temp, "frame {frame}: rolled {roll}").unwrap();
//!     let text = temp.text(&label).unwrap();
//!     assert!(text.starts_with("frame "));
//!     let _key = hash_str(text);
//!
//!     let mut sb = temp.builder(8).unwrap();
//!     let _ = sb.push_str("truncated label");
//!     assert_eq!(sb.bytes_needed(), 16);
//!
//!     temp.reset();
//! }
//! assert_eq!(temp.frame(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `bistack-arena` | `BiStack`, `TempArena`, handles, config, errors |
//! | [`text`] | `bistack-text` | `StringBuilder`, two-pass format sizing |
//! | [`rand`] | `bistack-rand` | `Pcg32`, bounded sampling, shuffling |
//! | [`hash`] | `bistack-hash` | FNV-1a over bytes and text |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Double-ended arena and per-frame temporary allocator (`bistack-arena`).
pub use bistack_arena as arena;

/// Bounded string building and format sizing (`bistack-text`).
pub use bistack_text as text;

/// Deterministic PCG generator and shuffling (`bistack-rand`).
pub use bistack_rand as rand;

/// FNV-1a hashing (`bistack-hash`).
pub use bistack_hash as hash;

pub use bistack_arena::temp_format;

/// Common imports for typical bistack usage.
///
/// ```rust
/// use bistack::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use bistack_arena::{
        temp_format, ArenaConfig, ArenaError, BiStack, End, TempArena, TempHandle, TextHandle,
    };

    // Text
    pub use bistack_text::{Appended, StringBuilder};

    // Random
    pub use bistack_rand::{shuffle, shuffle_chunks, Pcg32};

    // Hashing
    pub use bistack_hash::{hash_bytes, hash_str, BuildFnv1a, Fnv1a};
}
