//! Keyword and punctuation tables.
//!
//! Both sets are plain data: adding a keyword or an operator is a new row,
//! the tokenizer's algorithm does not change.
//!
//! # Punctuation
//!
//! [`PUNCTUATION`] is ordered longest lexeme first. [`punctuation`] returns
//! the first row whose lexeme the input starts with, which makes it a
//! longest-match alternation once multi-character operators are added.

use expy_lexer_core::Cursor;

use crate::TokenKind;

/// Reserved words. Matching is exact and case-sensitive.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("not", TokenKind::Not),
    ("or", TokenKind::Or),
    ("and", TokenKind::And),
    ("of", TokenKind::Of),
    ("in", TokenKind::In),
    ("is", TokenKind::Is),
];

/// Operator lexemes, longest first.
pub const PUNCTUATION: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("=", TokenKind::Equal),
];

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers and class names.
#[inline]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(lexeme, _)| *lexeme == text)
        .map(|&(_, kind)| kind)
}

/// Match the operator starting at the cursor, preferring the longest.
#[inline]
pub(crate) fn punctuation(cursor: &Cursor<'_>) -> Option<(&'static str, TokenKind)> {
    PUNCTUATION
        .iter()
        .copied()
        .find(|(lexeme, _)| cursor.starts_with(lexeme))
}
