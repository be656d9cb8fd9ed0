//! Bounded string builder with truncation accounting.
//!
//! [`StringBuilder`] writes into a borrowed buffer and never grows it. Each
//! append stores what fits (always leaving room for the NUL terminator) and
//! adds the full logical size to [`StringBuilder::bytes_needed`], so a caller
//! that sees `bytes_needed() > capacity()` knows the exact buffer size a
//! second attempt needs.

use std::fmt;

use crate::format::{BoundedWriter, FORMAT_ERROR};

/// Outcome of a single append or bounded write.
///
/// Neither count includes the terminator. `written < required` means the
/// call was truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Appended {
    /// Bytes physically stored by the call.
    pub written: usize,
    /// Bytes the call would have stored given unlimited space.
    pub required: usize,
}

impl Appended {
    /// Whether some of the call's output was dropped.
    pub fn is_truncated(&self) -> bool {
        self.written < self.required
    }

    fn merge(self, other: Appended) -> Appended {
        Appended {
            written: self.written + other.written,
            required: self.required + other.required,
        }
    }
}

/// Append-only text builder over a caller-owned, fixed-size buffer.
///
/// The buffer is NUL-terminated after every operation. A zero-capacity
/// buffer is valid: nothing is stored, but [`bytes_needed`] still accrues.
///
/// [`bytes_needed`]: StringBuilder::bytes_needed
pub struct StringBuilder<'a> {
    buf: &'a mut [u8],
    /// Bytes physically written. Always `< buf.len()` when the buffer is non-empty.
    cursor: usize,
    /// Logical size of the content, terminator included.
    bytes_needed: usize,
}

impl<'a> StringBuilder<'a> {
    /// Bind a builder to `buf`, writing an initial terminator.
    pub fn new(buf: &'a mut [u8]) -> Self {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        Self {
            buf,
            cursor: 0,
            bytes_needed: 1,
        }
    }

    /// Append one byte.
    pub fn push_byte(&mut self, byte: u8) -> Appended {
        self.bytes_needed += 1;
        if self.cursor + 1 < self.buf.len() {
            self.buf[self.cursor] = byte;
            self.cursor += 1;
            self.buf[self.cursor] = 0;
            Appended {
                written: 1,
                required: 1,
            }
        } else {
            Appended {
                written: 0,
                required: 1,
            }
        }
    }

    /// Append the UTF-8 encoding of `c`.
    ///
    /// Truncation works byte-wise, so a character may be cut part-way;
    /// [`as_str`](Self::as_str) drops such a partial tail.
    pub fn push_char(&mut self, c: char) -> Appended {
        let mut tmp = [0u8; 4];
        self.push_bytes(c.encode_utf8(&mut tmp).as_bytes())
    }

    /// Append `text` byte by byte.
    pub fn push_str(&mut self, text: &str) -> Appended {
        self.push_bytes(text.as_bytes())
    }

    /// Append `data` byte by byte.
    pub fn push_bytes(&mut self, data: &[u8]) -> Appended {
        data.iter()
            .fold(Appended::default(), |acc, &b| acc.merge(self.push_byte(b)))
    }

    /// Append formatted output.
    ///
    /// The write is bounded by the remaining space, but every byte the
    /// formatter produces is counted, so `required` always matches what
    /// [`required_len`](crate::required_len) reports for the same arguments.
    /// If formatting fails, anything this call wrote is discarded and
    /// [`FORMAT_ERROR`] is appended instead.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Appended {
        let start = self.cursor;
        let mut writer = BoundedWriter::new(&mut *self.buf, start);
        let result = fmt::Write::write_fmt(&mut writer, args);
        let (end, produced) = (writer.pos, writer.produced);
        match result {
            Ok(()) => {
                self.cursor = end;
                self.bytes_needed += produced;
                self.terminate();
                Appended {
                    written: end - start,
                    required: produced,
                }
            }
            Err(fmt::Error) => {
                self.terminate();
                self.push_str(FORMAT_ERROR)
            }
        }
    }

    /// Bytes physically stored, excluding the terminator.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Size of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Logical size of everything appended so far, terminator included.
    pub fn bytes_needed(&self) -> usize {
        self.bytes_needed
    }

    /// Whether any appended content was dropped.
    pub fn is_truncated(&self) -> bool {
        self.bytes_needed > self.buf.len()
    }

    /// Stored bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.cursor]
    }

    /// Stored bytes including the terminator. Empty for a zero-capacity buffer.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let end = (self.cursor + 1).min(self.buf.len());
        &self.buf[..end]
    }

    /// Longest valid UTF-8 prefix of the stored bytes.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match std::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Discard all content and restart accounting.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.bytes_needed = 1;
        self.terminate();
    }

    fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.cursor) {
            *slot = 0;
        }
    }
}

impl fmt::Write for StringBuilder<'_> {
    /// Never fails; truncation is reported through [`StringBuilder::bytes_needed`].
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = self.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for StringBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("text", &self.as_str())
            .field("capacity", &self.buf.len())
            .field("bytes_needed", &self.bytes_needed)
            .finish()
    }
}
