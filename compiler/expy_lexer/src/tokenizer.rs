//! The rule cascade.
//!
//! At each position the rules in [`Tokenizer::RULES`] are tried in order and
//! the first that matches wins. A rule either declines without consuming
//! input, consumes trivia (comment, whitespace), emits a token, emits a
//! newline group, or fails the run. Overlapping prefixes (`0x` against `0`,
//! `1.5` against `1`, `12j` against `12`) are resolved purely by this order.
//!
//! Every rule that matches advances the cursor, except the end sentinel,
//! which finishes the run.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use expy_lexer_core::{Cursor, SourceBuffer};

use crate::indent::{IndentChange, IndentStack};
use crate::keywords::{keyword, punctuation};
use crate::{LexError, Token, TokenKind};

/// Result of one matching rule.
enum Scanned<'src> {
    /// Input consumed, nothing emitted; restart the cascade.
    Trivia,
    Token(Token<'src>),
    /// NEWLINE followed by any INDENT/DEDENT, all at the group's offset.
    Group(Vec<Token<'src>>),
}

type Rule<'src> = fn(&mut Tokenizer<'src>) -> Result<Option<Scanned<'src>>, LexError>;

/// Streaming tokenizer over one [`SourceBuffer`].
///
/// Yields tokens up to and including EOF, or stops after the first error.
/// Tokens of a newline group are only released once the whole group has
/// been scanned, so a failing group yields the error and nothing of the
/// group.
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    indents: IndentStack,
    pending: VecDeque<Token<'src>>,
    done: bool,
}

impl<'src> Tokenizer<'src> {
    /// Matching rules, highest priority first.
    const RULES: [Rule<'src>; 13] = [
        Self::comment,
        Self::word,
        Self::imaginary,
        Self::hex,
        Self::octal,
        Self::binary,
        Self::float,
        Self::decimal,
        Self::string,
        Self::newline_group,
        Self::punctuation,
        Self::end_sentinel,
        Self::whitespace,
    ];

    pub fn new(source: &'src SourceBuffer) -> Self {
        Tokenizer {
            cursor: source.cursor(),
            indents: IndentStack::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Run the cascade until one rule emits something.
    fn scan(&mut self) -> Result<(), LexError> {
        'cascade: loop {
            for rule in Self::RULES {
                match rule(self)? {
                    None => {}
                    Some(Scanned::Trivia) => continue 'cascade,
                    Some(Scanned::Token(token)) => {
                        self.done = token.kind == TokenKind::Eof;
                        self.pending.push_back(token);
                        return Ok(());
                    }
                    Some(Scanned::Group(tokens)) => {
                        self.pending.extend(tokens);
                        return Ok(());
                    }
                }
            }
            return Err(LexError::bad_lexeme(self.cursor.pos()));
        }
    }

    // ─── Trivia ──────────────────────────────────────────────────────

    /// `"` to end of line. Produces no token.
    ///
    /// The body must hold at least one byte; a bare `"` is not a comment.
    fn comment(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        if self.cursor.current() != b'"' {
            return Ok(None);
        }
        let mut body = self.cursor;
        body.advance();
        if body.current() == b'\n' || body.is_eof() {
            return Ok(None);
        }
        self.cursor = body;
        self.cursor.eat_until_newline_or_eof();
        Ok(Some(Scanned::Trivia))
    }

    /// Spaces, tabs and carriage returns between lexemes.
    fn whitespace(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        if !is_horizontal_space(self.cursor.current()) {
            return Ok(None);
        }
        self.cursor.eat_while(is_horizontal_space);
        Ok(Some(Scanned::Trivia))
    }

    // ─── Words ───────────────────────────────────────────────────────

    /// Keyword, class name or identifier.
    fn word(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        let first = self.cursor.current();
        if !is_ident_start(first) {
            return Ok(None);
        }
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);

        let kind = keyword(text).unwrap_or(if first.is_ascii_uppercase() {
            TokenKind::ClassName
        } else {
            TokenKind::Identifier
        });
        Ok(Some(Scanned::Token(Token::new(kind, text, start))))
    }

    // ─── Numbers ─────────────────────────────────────────────────────

    /// Digits immediately followed by `j`.
    fn imaginary(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        let start = self.cursor.pos();
        let mut ahead = self.cursor;
        ahead.eat_while(|b| b.is_ascii_digit());
        if ahead.pos() == start || ahead.current() != b'j' {
            return Ok(None);
        }
        ahead.advance();
        self.cursor = ahead;
        let text = self.cursor.slice_from(start);
        Ok(Some(Scanned::Token(Token::new(TokenKind::Imag, text, start))))
    }

    fn hex(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        self.radix_number("0x", TokenKind::Hex, |b| b.is_ascii_hexdigit())
    }

    fn octal(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        self.radix_number("0o", TokenKind::Oct, |b| matches!(b, b'0'..=b'7'))
    }

    fn binary(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        self.radix_number("0b", TokenKind::Bin, |b| matches!(b, b'0' | b'1'))
    }

    /// `prefix` then at least one digit. The token text is the digits only.
    ///
    /// Once the prefix matched, a missing digit is an error rather than a
    /// fallback to the decimal rule.
    fn radix_number(
        &mut self,
        prefix: &'static str,
        kind: TokenKind,
        is_digit: fn(u8) -> bool,
    ) -> Result<Option<Scanned<'src>>, LexError> {
        if !self.cursor.starts_with(prefix) {
            return Ok(None);
        }
        let start = self.cursor.pos();
        self.cursor.advance_n(2);
        let digits = self.cursor.pos();
        self.cursor.eat_while(is_digit);
        if self.cursor.pos() == digits {
            return Err(LexError::bad_number_prefix(digits, prefix));
        }
        let text = self.cursor.slice_from(digits);
        Ok(Some(Scanned::Token(Token::new(kind, text, start))))
    }

    /// `digits.digits`, optionally followed by `e`, an optional sign, digits.
    ///
    /// An `e` without exponent digits is left for the next lexeme.
    fn float(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        let start = self.cursor.pos();
        let mut ahead = self.cursor;
        if eat_digits(&mut ahead) == 0 || ahead.current() != b'.' {
            return Ok(None);
        }
        ahead.advance();
        if eat_digits(&mut ahead) == 0 {
            return Ok(None);
        }

        if ahead.current() == b'e' {
            let mut exponent = ahead;
            exponent.advance();
            if matches!(exponent.current(), b'+' | b'-') {
                exponent.advance();
            }
            if eat_digits(&mut exponent) > 0 {
                ahead = exponent;
            }
        }

        self.cursor = ahead;
        let text = self.cursor.slice_from(start);
        Ok(Some(Scanned::Token(Token::new(TokenKind::Float, text, start))))
    }

    /// `0` alone, or a nonzero digit followed by any digits.
    fn decimal(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b'0' => self.cursor.advance(),
            b'1'..=b'9' => {
                self.cursor.advance();
                eat_digits(&mut self.cursor);
            }
            _ => return Ok(None),
        }
        let text = self.cursor.slice_from(start);
        Ok(Some(Scanned::Token(Token::new(TokenKind::Dec, text, start))))
    }

    // ─── Strings ─────────────────────────────────────────────────────

    /// `'...'` with validated escapes.
    ///
    /// Escapes are checked but not decoded: the token text is the content
    /// between the quotes exactly as written, `\n` staying two characters.
    fn string(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        if self.cursor.current() != b'\'' {
            return Ok(None);
        }
        let quote = self.cursor.pos();
        self.cursor.advance();
        let content = self.cursor.pos();

        loop {
            match self.cursor.skip_to_string_delim() {
                b'\'' => {
                    let text = self.cursor.slice_from(content);
                    self.cursor.advance();
                    return Ok(Some(Scanned::Token(Token::new(TokenKind::Str, text, quote))));
                }
                b'\\' => {
                    self.cursor.advance();
                    if !is_escape_target(self.cursor.current()) {
                        return Err(LexError::bad_escape_sequence(self.cursor.pos(), quote));
                    }
                    self.cursor.advance();
                }
                // Newline, interior NUL or the sentinel.
                _ => return Err(LexError::bad_string(quote)),
            }
        }
    }

    // ─── Layout ──────────────────────────────────────────────────────

    /// One or more `\n` (each optionally followed by `\r`), then the
    /// indentation of the next line.
    ///
    /// Indentation only counts when the line has content: a line whose
    /// leading whitespace is followed by a comment, another newline or the
    /// end sentinel leaves the stack alone.
    fn newline_group(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        if self.cursor.current() != b'\n' {
            return Ok(None);
        }
        let start = self.cursor.pos();
        while self.cursor.current() == b'\n' {
            self.cursor.advance();
            if self.cursor.current() == b'\r' {
                self.cursor.advance();
            }
        }

        let mut group = vec![Token::textless(TokenKind::Newline, start)];
        let width = self.cursor.eat_whitespace();
        if is_blank_line(&self.cursor) {
            return Ok(Some(Scanned::Group(group)));
        }

        match self.indents.apply(width) {
            Some(IndentChange::Indent) => {
                tracing::trace!(offset = start, width, "indent");
                group.push(Token::textless(TokenKind::Indent, start));
            }
            Some(IndentChange::Dedent(closed)) => {
                tracing::trace!(offset = start, width, closed, "dedent");
                group.extend((0..closed).map(|_| Token::textless(TokenKind::Dedent, start)));
            }
            Some(IndentChange::Same) => {}
            None => {
                tracing::debug!(
                    offset = self.cursor.pos(),
                    width,
                    open = self.indents.top(),
                    "indentation matches no open level"
                );
                return Err(LexError::inconsistent_indentation(self.cursor.pos(), width));
            }
        }
        Ok(Some(Scanned::Group(group)))
    }

    // ─── Punctuation & End ───────────────────────────────────────────

    fn punctuation(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        let Some((lexeme, kind)) = punctuation(&self.cursor) else {
            return Ok(None);
        };
        let start = self.cursor.pos();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "operator lexemes are a few bytes long"
        )]
        self.cursor.advance_n(lexeme.len() as u32);
        let text = self.cursor.slice_from(start);
        Ok(Some(Scanned::Token(Token::new(kind, text, start))))
    }

    /// The sentinel itself. Does not advance; the run ends here.
    fn end_sentinel(&mut self) -> Result<Option<Scanned<'src>>, LexError> {
        if !self.cursor.is_eof() {
            return Ok(None);
        }
        let eof = Token::textless(TokenKind::Eof, self.cursor.pos());
        Ok(Some(Scanned::Token(eof)))
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(Ok(token));
        }
        if self.done {
            return None;
        }
        match self.scan() {
            Ok(()) => self.pending.pop_front().map(Ok),
            Err(err) => {
                self.done = true;
                tracing::debug!(offset = err.offset, kind = ?err.kind, "lexical error");
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

#[inline]
fn is_escape_target(b: u8) -> bool {
    matches!(b, b'n' | b'r' | b't' | b'v' | b'0' | b'\'' | b'"' | b'\\')
}

/// Comment start, newline or end sentinel after the leading whitespace.
#[inline]
fn is_blank_line(cursor: &Cursor<'_>) -> bool {
    matches!(cursor.current(), b'"' | b'\n') || cursor.is_eof()
}

/// Eat ASCII digits, returning how many were eaten.
#[inline]
fn eat_digits(cursor: &mut Cursor<'_>) -> u32 {
    let start = cursor.pos();
    cursor.eat_while(|b| b.is_ascii_digit());
    cursor.pos() - start
}
