//! Lexical error rendering.
//!
//! Turns a [`LexError`] into a located [`Diagnostic`]. The tokenizer only
//! knows the offset; line, column and the offending character are resolved
//! here against the scanned text.

use std::path::Path;

use expy_diagnostic::Diagnostic;
use expy_lexer::{LexError, SourceBuffer};

/// File label for interactive input.
pub const STDIN_LABEL: &str = "<stdin>";

/// File label for a path: the path in double quotes.
pub fn file_label(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

pub fn lex_error_diagnostic(error: &LexError, source: &SourceBuffer, label: &str) -> Diagnostic {
    Diagnostic::lexical(&error.message())
        .located(source.text(), error.offset)
        .in_file(label)
}
