//! Bounded text output for scratch buffers.
//!
//! Two pieces, both working over caller-supplied byte buffers:
//!
//! - [`StringBuilder`] appends bytes, text, and formatted output into a
//!   fixed buffer. Overflow is truncated physically but always accounted
//!   for logically, so callers can tell exactly how large a retry must be.
//! - [`format`] implements two-pass sizing: [`required_len`] measures a
//!   format without writing it, [`write_into`] performs the bounded write.
//!
//! Every buffer this crate writes is kept NUL-terminated, so its contents can
//! be handed to consumers that expect terminated text.
//!
//! ```text
//! capacity 5, push "ABCDEFG":
//!   buf          = [A, B, C, D, \0]
//!   len()        = 4
//!   bytes_needed = 8   (7 bytes + terminator)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod format;

pub use builder::{Appended, StringBuilder};
pub use format::{required_len, write_into, FORMAT_ERROR};
