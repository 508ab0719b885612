//! Offset to line/column conversion.
//!
//! Offsets are byte offsets into the tokenized text. Lines and columns are
//! 1-based; columns count characters, not bytes.

/// Label used when the offending character is a line end or the sentinel.
pub const END_OF_INPUT: &str = "end-of-input";

/// Compute 1-based `(line, column)` for a byte offset.
///
/// The line is one more than the number of `\n` bytes before `offset`. The
/// column is one more than the number of characters between the last such
/// newline and `offset`. An offset pointing at a newline belongs to the line
/// that newline ends. Offsets past the end (the sentinel) clamp to
/// `source.len()`.
///
/// ```
/// use expy_diagnostic::span_utils::resolve;
///
/// assert_eq!(resolve("ab\ncd", 0), (1, 1));
/// assert_eq!(resolve("ab\ncd", 2), (1, 3));
/// assert_eq!(resolve("ab\ncd", 3), (2, 1));
/// ```
pub fn resolve(source: &str, offset: u32) -> (u32, u32) {
    let end = (offset as usize).min(source.len());
    let prefix = &source.as_bytes()[..end];

    let newlines = memchr::memchr_iter(b'\n', prefix).count();
    let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);

    // Every UTF-8 character has exactly one non-continuation byte.
    let chars = prefix[line_start..]
        .iter()
        .filter(|&&b| (b & 0xC0) != 0x80)
        .count();

    (saturate(newlines) + 1, saturate(chars) + 1)
}

/// Describe the character at `offset` for an error report.
///
/// Returns [`END_OF_INPUT`] for a newline, a NUL, or an offset past the end;
/// otherwise the character wrapped in double quotes.
pub fn char_at(source: &str, offset: u32) -> String {
    match source.get(offset as usize..).and_then(|rest| rest.chars().next()) {
        None | Some('\n' | '\0') => END_OF_INPUT.to_string(),
        Some(c) => format!("\"{c}\""),
    }
}

#[inline]
fn saturate(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX - 1)
}

#[cfg(test)]
mod tests;
