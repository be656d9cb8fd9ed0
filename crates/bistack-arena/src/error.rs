//! Arena-specific error types.

use std::error::Error;
use std::fmt;
use std::ops::Range;

use crate::handle::End;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Not enough free space between the two cursors.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Free bytes between the front and back cursors.
        remaining: usize,
    },
    /// A handle from a generation that has since been reset.
    StaleHandle {
        /// Which end of the arena the handle was carved from.
        end: End,
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The current generation of that end.
        current_generation: u32,
    },
    /// A handle whose range lies outside the live region of its end.
    HandleOutOfBounds {
        /// Start of the handle's range.
        offset: usize,
        /// Length of the handle's range.
        len: usize,
        /// The live region the handle was checked against.
        live: Range<usize>,
    },
    /// Rejected configuration.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// Bytes behind a text handle are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, remaining {remaining} bytes"
                )
            }
            Self::StaleHandle {
                end,
                handle_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale {end} handle: generation {handle_generation}, current {current_generation}"
                )
            }
            Self::HandleOutOfBounds { offset, len, live } => {
                write!(
                    f,
                    "handle range {offset}..{} outside live region {}..{}",
                    offset.saturating_add(*len),
                    live.start,
                    live.end
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
            Self::InvalidUtf8 => write!(f, "text handle does not contain valid UTF-8"),
        }
    }
}

impl Error for ArenaError {}
