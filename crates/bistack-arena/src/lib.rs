//! Double-ended bump arena and per-frame temporary allocator.
//!
//! # Architecture
//!
//! ```text
//! TempArena (frame-scoped facade: zeroing, copies, text, logging)
//! └── BiStack (fixed buffer, front + back bump cursors)
//!     ├── front generation ──► TempHandle { End::Front, .. }
//!     └── back generation  ──► TempHandle { End::Back, .. }
//! ```
//!
//! Allocations are never freed one at a time. Each end is reclaimed in bulk
//! by a reset, which bumps that end's generation; handles minted before the
//! reset then fail to resolve with [`ArenaError::StaleHandle`] instead of
//! reading memory that has been handed out again.
//!
//! # Failure model
//!
//! - Running out of space is recoverable: [`ArenaError::CapacityExceeded`],
//!   plus a `tracing` warning from [`TempArena`].
//! - Formatting failures become the text [`FORMAT_ERROR`].
//! - The arena never grows.
//!
//! [`FORMAT_ERROR`]: bistack_text::FORMAT_ERROR

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bistack;
pub mod config;
pub mod error;
pub mod handle;
pub mod temp;

// Public re-exports for the primary API surface.
pub use bistack::BiStack;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{End, TempHandle, TextHandle};
pub use temp::TempArena;
