//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte by byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the text length. No explicit bounds checking
//! is performed in the common case; the sentinel guarantees termination.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < text_len` is an interior null, not EOF. Callers use
//! [`Cursor::is_eof`] to tell them apart.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines separate memchr calls when more than three needles are needed.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`]: a copy is a snapshot. Speculative look-ahead
/// scans a copy and either assigns it back (commit) or drops it (abandon),
/// so a failed match never partially consumes input.
///
/// # Invariant
///
/// `buf[text_len] == 0x00`, and all bytes after `text_len` are `0x00`
/// (cache-line padding). Guaranteed by [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (text + sentinel + padding).
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the text (excludes sentinel and padding).
    text_len: u32,
}

/// Size assertion: &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf.as_bytes()[text_len]` must be `0x00` and be followed by at least
    /// one more `0x00` byte.
    pub(crate) fn new(buf: &'a str, text_len: u32) -> Self {
        debug_assert!(
            (text_len as usize) + 1 < buf.len(),
            "sentinel and one padding byte must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[text_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            text_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor sits on the end sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.text_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Returns `true` if the upcoming bytes equal `lexeme`.
    ///
    /// Never reads past the padding: a mismatch on the sentinel stops the
    /// comparison before the slice could run out.
    #[inline]
    pub fn starts_with(&self, lexeme: &str) -> bool {
        self.buf.as_bytes()[self.pos as usize..].starts_with(lexeme.as_bytes())
    }

    /// Extract a text substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the text and on character boundaries.
    /// The tokenizer only cuts after ASCII bytes or whole UTF-8 characters.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.text_len,
            "slice end {end} exceeds text length {}",
            self.text_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a text substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to the sentinel if there is none.
    ///
    /// Used to skip comment bodies.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= text_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf.as_bytes()[self.pos as usize..self.text_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.text_len;
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Interesting bytes inside a `'...'` literal: `'`, `\`, `\n` and NUL.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= text_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf.as_bytes()[self.pos as usize..self.text_len as usize];
        let primary = memchr::memchr3(b'\'', b'\\', b'\n', remaining);
        // Interior nulls end a string just like the sentinel does.
        let nul = memchr::memchr(0, remaining);

        if let Some(off) = earliest_of(primary, nul) {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.text_len;
            0
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    ///
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_whitespace(&mut self) -> u32 {
        let start = self.pos;
        loop {
            let b = self.current();
            if b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.pos - start
    }
}

#[cfg(test)]
mod tests;
