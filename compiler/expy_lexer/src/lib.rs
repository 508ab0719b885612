//! Tokenizer for Expy, a small indentation-sensitive language.
//!
//! Turns a [`SourceBuffer`] into classified [`Token`]s, synthesizing
//! NEWLINE/INDENT/DEDENT from layout, or fails with one [`LexError`].
//!
//! ```
//! use expy_lexer::{tokenize, SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::new("x = 0xFF");
//! let tokens = tokenize(&source).unwrap_or_default();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Equal, TokenKind::Hex, TokenKind::Newline, TokenKind::Eof]
//! );
//! assert_eq!(tokens[2].text, "FF");
//! ```
//!
//! Each run owns its cursor and indentation stack, so independent buffers
//! can be tokenized from different threads.

mod indent;
mod keywords;
mod lex_error;
mod token;
mod tokenizer;

pub use expy_lexer_core::SourceBuffer;
pub use keywords::{keyword, KEYWORDS, PUNCTUATION};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize a whole buffer.
///
/// Returns every token up to and including EOF, or the first error. Never
/// returns a partial sequence.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &SourceBuffer) -> Result<Vec<Token<'_>>, LexError> {
    let tokens = Tokenizer::new(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Check that a buffer tokenizes, without keeping the tokens.
///
/// Stops at the first error.
pub fn validate(source: &SourceBuffer) -> Result<(), LexError> {
    Tokenizer::new(source).try_for_each(|token| token.map(drop))
}
