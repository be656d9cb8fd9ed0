//! Allocation handles.
//!
//! A [`TempHandle`] records where an allocation lives and which generation of
//! its end it was carved from. Resetting an end bumps that end's generation,
//! so a handle that outlives the reset fails an O(1) check instead of
//! aliasing memory that has since been handed out again.

use std::fmt;

/// Which end of a [`BiStack`](crate::BiStack) an allocation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum End {
    /// Low end, growing upward.
    Front,
    /// High end, growing downward.
    Back,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => f.write_str("front"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// Location of a byte allocation inside an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct TempHandle {
    pub(crate) generation: u32,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) end: End,
}

impl TempHandle {
    pub(crate) fn new(generation: u32, offset: usize, len: usize, end: End) -> Self {
        Self {
            generation,
            offset,
            len,
            end,
        }
    }

    /// Generation of the owning end at allocation time.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Byte offset from the start of the arena buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The end this allocation was carved from.
    pub fn end(&self) -> End {
        self.end
    }
}

impl fmt::Display for TempHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TempHandle(gen={}, off={}, len={}, {})",
            self.generation, self.offset, self.len, self.end
        )
    }
}

/// Handle to NUL-terminated UTF-8 text stored in an arena.
///
/// The underlying allocation holds `text_len` bytes of text followed by a
/// terminator, possibly with unused slack after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct TextHandle {
    pub(crate) handle: TempHandle,
    pub(crate) text_len: usize,
}

impl TextHandle {
    pub(crate) fn new(handle: TempHandle, text_len: usize) -> Self {
        debug_assert!(text_len < handle.len);
        Self { handle, text_len }
    }

    /// The raw allocation, terminator included.
    pub fn raw(&self) -> TempHandle {
        self.handle
    }

    /// Length of the text in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.text_len
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text_len == 0
    }
}
