//! Lexical error types.
//!
//! A [`LexError`] carries WHERE (`offset`), WHAT (`kind`) and WHY
//! (`context`: what the tokenizer was scanning). Rendering (capitalization,
//! color, line/column) belongs to the caller; the message text here is
//! plain and stable so tests can match on it.

use thiserror::Error;

/// A lexical error. Terminal for the tokenization run that produced it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    /// Byte offset of the failure.
    pub offset: u32,
    pub kind: LexErrorKind,
    pub context: LexErrorContext,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// `0x`, `0o` or `0b` without a digit of that base.
    #[error("bad number: \"{prefix}\"")]
    BadNumberPrefix { prefix: &'static str },
    /// Newline or end of input before the closing `'`.
    #[error("bad string")]
    BadString,
    /// Backslash followed by a character outside `n r t v 0 ' " \`.
    #[error("bad escape sequence")]
    BadEscapeSequence,
    /// Leading whitespace width matches no open indentation level.
    #[error("inconsistent indentation")]
    InconsistentIndentation,
    /// No rule matches at this position.
    #[error("bad lexeme")]
    BadLexeme,
}

/// What the tokenizer was scanning when the error occurred.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    #[default]
    TopLevel,
    NumberLiteral,
    /// Inside a string literal opened at `start`.
    InsideString { start: u32 },
    /// Measuring a line indented by `width` bytes.
    Indentation { width: u32 },
}

impl LexError {
    /// `prefix` not followed by a digit; `offset` is the byte after the prefix.
    pub fn bad_number_prefix(offset: u32, prefix: &'static str) -> Self {
        LexError {
            offset,
            kind: LexErrorKind::BadNumberPrefix { prefix },
            context: LexErrorContext::NumberLiteral,
        }
    }

    /// Unterminated string; reported at the opening quote.
    pub fn bad_string(quote: u32) -> Self {
        LexError {
            offset: quote,
            kind: LexErrorKind::BadString,
            context: LexErrorContext::InsideString { start: quote },
        }
    }

    /// Illegal escape target at `offset` in the string opened at `quote`.
    pub fn bad_escape_sequence(offset: u32, quote: u32) -> Self {
        LexError {
            offset,
            kind: LexErrorKind::BadEscapeSequence,
            context: LexErrorContext::InsideString { start: quote },
        }
    }

    pub fn inconsistent_indentation(offset: u32, width: u32) -> Self {
        LexError {
            offset,
            kind: LexErrorKind::InconsistentIndentation,
            context: LexErrorContext::Indentation { width },
        }
    }

    pub fn bad_lexeme(offset: u32) -> Self {
        LexError {
            offset,
            kind: LexErrorKind::BadLexeme,
            context: LexErrorContext::TopLevel,
        }
    }

    /// The plain message, e.g. `bad string`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
