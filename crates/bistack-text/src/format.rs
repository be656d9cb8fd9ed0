//! Two-pass format sizing.
//!
//! [`required_len`] runs a format against a counting sink to learn its exact
//! length. [`write_into`] writes the same format into a bounded buffer and
//! reports both what was stored and what the full output would have needed.
//! Callers that allocate exactly `required_len(args)? + 1` bytes and then call
//! `write_into` never truncate.

use std::fmt::{self, Write};

use crate::builder::Appended;

/// Placeholder text substituted when a format fails to render.
pub const FORMAT_ERROR: &str = "format error";

/// Sink that only counts bytes.
struct Counter {
    len: usize,
}

impl Write for Counter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// Sink that stores bytes while they fit, always leaving room for a
/// terminator, and counts every byte it is offered.
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    /// Next physical write position.
    pub(crate) pos: usize,
    /// Bytes offered by the formatter, stored or not.
    pub(crate) produced: usize,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8], pos: usize) -> Self {
        Self {
            buf,
            pos,
            produced: 0,
        }
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len().saturating_sub(self.pos + 1);
        let take = room.min(s.len());
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
        self.produced += s.len();
        Ok(())
    }
}

/// Number of bytes `args` renders to, excluding any terminator.
///
/// Returns `Err` only when a `Display`/`Debug` implementation inside `args`
/// reports failure.
pub fn required_len(args: fmt::Arguments<'_>) -> Result<usize, fmt::Error> {
    if let Some(s) = args.as_str() {
        return Ok(s.len());
    }
    let mut counter = Counter { len: 0 };
    counter.write_fmt(args)?;
    Ok(counter.len)
}

/// Render `args` into `buf`, truncating if needed, and NUL-terminate.
///
/// The returned [`Appended`] reports the bytes stored and the bytes the full
/// rendering needed; neither count includes the terminator. An empty `buf`
/// stores nothing but still reports the required length.
///
/// On formatting failure `buf` is left holding an empty terminated string.
pub fn write_into(buf: &mut [u8], args: fmt::Arguments<'_>) -> Result<Appended, fmt::Error> {
    let mut writer = BoundedWriter::new(&mut *buf, 0);
    let result = writer.write_fmt(args);
    let appended = Appended {
        written: writer.pos,
        required: writer.produced,
    };
    match result {
        Ok(()) => {
            if let Some(slot) = buf.get_mut(appended.written) {
                *slot = 0;
            }
            Ok(appended)
        }
        Err(e) => {
            if let Some(first) = buf.first_mut() {
                *first = 0;
            }
            Err(e)
        }
    }
}
