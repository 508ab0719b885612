//! Sentinel-terminated source buffer.
//!
//! Every Expy buffer ends with `\n` followed by a `0x00` sentinel. The
//! trailing newline guarantees the last line is closed by an ordinary
//! newline group, and the sentinel marks end-of-input. The allocation is
//! rounded up to the next 64-byte boundary with zero padding, so reading one
//! or two bytes past any position inside the text is always valid.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// The suffix every tokenizable buffer carries.
const TERMINATOR: &str = "\n\0";

/// Owned source text in the layout the tokenizer requires.
///
/// # Layout
///
/// ```text
/// [source_bytes..., '\n', 0x00, padding_zeros...]
///  ^                       ^     ^
///  0                       |     rounded up to 64-byte boundary
///                     text_len (sentinel)
/// ```
///
/// NUL is valid UTF-8, so the whole buffer (padding included) is kept as a
/// `String` and slicing never needs `unsafe`.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source..., '\n', 0x00 sentinel, 0x00 padding...]`.
    buf: String,
    /// Length of the text including the trailing newline (the sentinel offset).
    text_len: u32,
}

impl SourceBuffer {
    /// Build a buffer from raw source text.
    ///
    /// Appends `\n` and the sentinel. Source that already ends with the
    /// `\n\0` suffix (the form interactive front ends hand over) is used
    /// as is, so the sentinel is never doubled.
    ///
    /// Sources larger than `u32::MAX` bytes saturate the recorded length;
    /// offsets are `u32` throughout the tokenizer.
    pub fn new(source: &str) -> Self {
        let body = source.strip_suffix(TERMINATOR).unwrap_or(source);
        let text_len = body.len() + 1;

        // Round up to next 64-byte boundary (minimum: text + sentinel + one
        // padding byte).
        let padded_len = (text_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(body);
        buf.push('\n');
        buf.push_str(&"\0".repeat(padded_len - text_len));

        Self {
            buf,
            text_len: u32::try_from(text_len).unwrap_or(u32::MAX),
        }
    }

    /// The text the tokenizer scans, including the trailing newline but not
    /// the sentinel. Error offsets index into this string.
    pub fn text(&self) -> &str {
        &self.buf[..self.text_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.text_len)
    }

    /// Length of the text in bytes. This is also the sentinel's offset.
    pub fn len(&self) -> u32 {
        self.text_len
    }

    /// Returns `true` if the text is only the appended newline.
    pub fn is_empty(&self) -> bool {
        self.text_len <= 1
    }
}
