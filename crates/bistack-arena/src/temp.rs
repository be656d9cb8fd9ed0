//! Per-frame temporary allocator.
//!
//! [`TempArena`] owns one [`BiStack`] and serves zero-filled allocations,
//! byte copies, and formatted text from its front end. The host calls
//! [`TempArena::reset`] once per frame; everything handed out during the
//! frame is invalidated together.
//!
//! Two ways to reach the memory:
//!
//! - **Handles** ([`TempHandle`], [`TextHandle`]) are `Copy` and can be held
//!   across calls. They are generation-checked, so resolving one after a
//!   reset fails with [`ArenaError::StaleHandle`].
//! - **Borrowed slices** ([`TempArena::scratch`], [`TempArena::builder`])
//!   hold `&mut TempArena`, so the borrow checker rules out a reset while
//!   they are alive.
//!
//! ```
//! use bistack_arena::{temp_format, TempArena};
//!
//! let mut temp = TempArena::default();
//! let label = temp_format!(temp, "score: {}", 1200).unwrap();
//! assert_eq!(temp.text(&label).unwrap(), "score: 1200");
//! temp.reset();
//! assert!(temp.text(&label).is_err());
//! ```

use std::fmt;

use bistack_text::{required_len, write_into, StringBuilder, FORMAT_ERROR};
use tracing::{trace, warn};

use crate::bistack::BiStack;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{TempHandle, TextHandle};

/// Frame-scoped allocator over a fixed-capacity [`BiStack`].
#[derive(Debug)]
pub struct TempArena {
    stack: BiStack,
    /// Number of resets so far.
    frame: u64,
    /// Peak front usage since construction.
    high_water: usize,
}

impl TempArena {
    /// Create an arena with the given configuration.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            stack: BiStack::new(config.capacity),
            frame: 0,
            high_water: 0,
        })
    }

    /// Shorthand for `TempArena::new(ArenaConfig::new(capacity))`.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Allocate `size` zero-filled bytes.
    ///
    /// Exhaustion is logged at warn level and returned as
    /// [`ArenaError::CapacityExceeded`]; the arena is left unchanged.
    pub fn alloc(&mut self, size: usize) -> Result<TempHandle, ArenaError> {
        let handle = self.alloc_uninit(size)?;
        self.stack.get_mut(&handle)?.fill(0);
        Ok(handle)
    }

    /// Allocate a copy of `data`. An empty slice yields an empty handle.
    pub fn copy(&mut self, data: &[u8]) -> Result<TempHandle, ArenaError> {
        let handle = self.alloc_uninit(data.len())?;
        self.stack.get_mut(&handle)?.copy_from_slice(data);
        Ok(handle)
    }

    /// Allocate a NUL-terminated copy of `text`.
    pub fn dup_str(&mut self, text: &str) -> Result<TextHandle, ArenaError> {
        let handle = self.alloc_uninit(text.len() + 1)?;
        let dst = self.stack.get_mut(&handle)?;
        dst[..text.len()].copy_from_slice(text.as_bytes());
        dst[text.len()] = 0;
        Ok(TextHandle::new(handle, text.len()))
    }

    /// Render `args` into exactly-sized, NUL-terminated arena text.
    ///
    /// The length is measured first and the allocation made to fit, so the
    /// result is never truncated. If a formatting trait implementation fails,
    /// the result is [`FORMAT_ERROR`] instead. See also [`temp_format!`].
    ///
    /// [`temp_format!`]: crate::temp_format
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Result<TextHandle, ArenaError> {
        let Ok(len) = required_len(args) else {
            return self.dup_str(FORMAT_ERROR);
        };
        let handle = self.alloc_uninit(len + 1)?;
        let written = write_into(self.stack.get_mut(&handle)?, args);
        match written {
            Ok(out) => Ok(TextHandle::new(handle, out.written)),
            Err(fmt::Error) => self.dup_str(FORMAT_ERROR),
        }
    }

    /// Borrow a zero-filled scratch slice for the duration of the borrow.
    pub fn scratch(&mut self, size: usize) -> Result<&mut [u8], ArenaError> {
        let handle = self.alloc(size)?;
        self.stack.get_mut(&handle)
    }

    /// Borrow a [`StringBuilder`] over `capacity` fresh arena bytes.
    pub fn builder(&mut self, capacity: usize) -> Result<StringBuilder<'_>, ArenaError> {
        Ok(StringBuilder::new(self.scratch(capacity)?))
    }

    /// Resolve a handle from this frame.
    pub fn get(&self, handle: &TempHandle) -> Result<&[u8], ArenaError> {
        self.stack.get(handle)
    }

    /// Resolve a handle from this frame for writing.
    pub fn get_mut(&mut self, handle: &TempHandle) -> Result<&mut [u8], ArenaError> {
        self.stack.get_mut(handle)
    }

    /// Resolve a text handle, without its terminator.
    pub fn text(&self, handle: &TextHandle) -> Result<&str, ArenaError> {
        let bytes = self.stack.get(&handle.handle)?;
        std::str::from_utf8(&bytes[..handle.text_len]).map_err(|_| ArenaError::InvalidUtf8)
    }

    /// Reclaim everything allocated since the last reset.
    pub fn reset(&mut self) {
        let reclaimed = self.stack.used_front();
        self.stack.reset_front();
        self.frame += 1;
        trace!(frame = self.frame, reclaimed, "temp arena reset");
    }

    /// Bytes allocated this frame.
    pub fn used(&self) -> usize {
        self.stack.used_front()
    }

    /// Bytes still available this frame.
    pub fn remaining(&self) -> usize {
        self.stack.remaining()
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Number of resets performed.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Largest per-frame usage observed.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn alloc_uninit(&mut self, size: usize) -> Result<TempHandle, ArenaError> {
        match self.stack.alloc_front(size) {
            Ok(handle) => {
                self.high_water = self.high_water.max(self.stack.used_front());
                Ok(handle)
            }
            Err(e) => {
                warn!(
                    requested = size,
                    remaining = self.stack.remaining(),
                    frame = self.frame,
                    "temporary allocation failed"
                );
                Err(e)
            }
        }
    }
}

impl Default for TempArena {
    /// A 256 KiB arena.
    fn default() -> Self {
        Self {
            stack: BiStack::new(ArenaConfig::DEFAULT_CAPACITY),
            frame: 0,
            high_water: 0,
        }
    }
}

/// Format into a [`TempArena`], returning `Result<TextHandle, ArenaError>`.
///
/// ```
/// # use bistack_arena::{temp_format, TempArena};
/// let mut temp = TempArena::with_capacity(64).unwrap();
/// let h = temp_format!(temp, "{}x{}", 640, 480).unwrap();
/// assert_eq!(temp.text(&h).unwrap(), "640x480");
/// ```
#[macro_export]
macro_rules! temp_format {
    ($arena:expr, $($arg:tt)*) => {
        $arena.format(::core::format_args!($($arg)*))
    };
}
