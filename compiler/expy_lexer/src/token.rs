//! Token types produced by the tokenizer.

use std::fmt;

/// Category tag of a token.
///
/// Keyword variants print as their uppercased lexeme, punctuation variants
/// as the literal character. See [`TokenKind::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Words ===
    /// Lowercase- or underscore-initial name.
    Identifier,
    /// Uppercase-initial name.
    ClassName,

    // === Keywords ===
    Not,
    Or,
    And,
    Of,
    In,
    Is,

    // === Literals ===
    /// Digits followed by `j`, e.g. `12j`.
    Imag,
    /// `0x` literal; text holds the digits only.
    Hex,
    /// `0o` literal; text holds the digits only.
    Oct,
    /// `0b` literal; text holds the digits only.
    Bin,
    Float,
    Dec,
    /// `'...'` literal; text holds the content with escapes left as written.
    Str,

    // === Punctuation ===
    Plus,
    Minus,
    Star,
    Slash,
    Equal,

    // === Structural ===
    Newline,
    Indent,
    Dedent,
    Eof,
}

impl TokenKind {
    /// The tag as printed in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::ClassName => "CLASSNAME",
            TokenKind::Not => "NOT",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::Of => "OF",
            TokenKind::In => "IN",
            TokenKind::Is => "IS",
            TokenKind::Imag => "IMAG",
            TokenKind::Hex => "HEX",
            TokenKind::Oct => "OCT",
            TokenKind::Bin => "BIN",
            TokenKind::Float => "FLOAT",
            TokenKind::Dec => "DEC",
            TokenKind::Str => "STR",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Eof => "EOF",
        }
    }

    /// NEWLINE, INDENT and DEDENT: tokens synthesized from layout.
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent
        )
    }

    /// Tokens that carry no lexeme text.
    pub const fn is_textless(self) -> bool {
        self.is_structural() || matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` borrows from the source buffer. For structural tokens and EOF it
/// is empty.
///
/// # Equality
///
/// Two tokens are equal iff their kinds are equal; text and offset are
/// ignored. Compare `text`/`offset` explicitly when values matter.
#[derive(Clone, Copy, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Byte offset of the first byte of the lexeme (or of the newline
    /// group for structural tokens).
    pub offset: u32,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, offset: u32) -> Self {
        Token { kind, text, offset }
    }

    /// A token with no text (NEWLINE, INDENT, DEDENT, EOF).
    #[inline]
    pub fn textless(kind: TokenKind, offset: u32) -> Self {
        debug_assert!(kind.is_textless(), "{kind} carries text");
        Token {
            kind,
            text: "",
            offset,
        }
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Token<'_> {}

impl PartialEq<TokenKind> for Token<'_> {
    fn eq(&self, other: &TokenKind) -> bool {
        self.kind == *other
    }
}

/// Renders `Token(type=KIND, value="TEXT", pos=OFFSET)`.
///
/// Textless tokens render `value="None"`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_textless() {
            write!(
                f,
                "Token(type={}, value=\"None\", pos={})",
                self.kind, self.offset
            )
        } else {
            write!(
                f,
                "Token(type={}, value=\"{}\", pos={})",
                self.kind, self.text, self.offset
            )
        }
    }
}
