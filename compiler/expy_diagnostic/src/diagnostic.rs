//! A located, human-facing error report.

use crate::span_utils;

/// One error, ready for rendering.
///
/// Built from a plain message, then located against the scanned text and
/// tagged with the file label it came from:
///
/// ```
/// use expy_diagnostic::Diagnostic;
///
/// let diag = Diagnostic::lexical("bad string")
///     .located("x = 'oops\n", 4)
///     .in_file("\"demo.expy\"");
/// assert_eq!(diag.message, "Bad string");
/// assert_eq!(diag.near, "\"'\"");
/// assert_eq!((diag.line, diag.column), (1, 5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Phase that failed, e.g. `Lexical error`.
    pub title: &'static str,
    /// Capitalized message.
    pub message: String,
    /// The offending character quoted, or `end-of-input`.
    pub near: String,
    /// File label exactly as displayed (`"path"` or `<stdin>`).
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    /// A tokenizer error with the message's first letter uppercased.
    pub fn lexical(message: &str) -> Self {
        Diagnostic {
            title: "Lexical error",
            message: capitalize(message),
            near: span_utils::END_OF_INPUT.to_string(),
            file: String::new(),
            line: 1,
            column: 1,
        }
    }

    /// Resolve `offset` against `source` for line, column and the
    /// offending character.
    #[must_use]
    pub fn located(mut self, source: &str, offset: u32) -> Self {
        (self.line, self.column) = span_utils::resolve(source, offset);
        self.near = span_utils::char_at(source, offset);
        self
    }

    #[must_use]
    pub fn in_file(mut self, label: impl Into<String>) -> Self {
        self.file = label.into();
        self
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
