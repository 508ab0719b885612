//! Command handlers for the `expy` binary.
//!
//! Handlers write tokens to `out` and reports through a [`TerminalEmitter`],
//! so the binary passes stdout/stderr and tests pass byte buffers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use expy_diagnostic::TerminalEmitter;
use expy_lexer::{tokenize, SourceBuffer};
use thiserror::Error;

use crate::reporting::{file_label, lex_error_diagnostic, STDIN_LABEL};

pub const PROMPT: &str = "> ";

/// How a tokenization ended. The binary maps this to its exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was printed.
    Tokenized,
    /// A lexical error was reported instead.
    Rejected,
}

/// Failures outside tokenization itself.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),
    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),
    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Tokenize `source`, printing one token per line on success or the
/// rendered error on failure.
///
/// Output is all-or-nothing: a source that fails prints no tokens.
pub fn lex_source<O: Write, E: Write>(
    source: &str,
    label: &str,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> io::Result<Outcome> {
    let buffer = SourceBuffer::new(source);
    match tokenize(&buffer) {
        Ok(tokens) => {
            for token in &tokens {
                writeln!(out, "{token}")?;
            }
            Ok(Outcome::Tokenized)
        }
        Err(error) => {
            tracing::debug!(label, context = ?error.context, "reporting lexical error");
            emitter.emit(&lex_error_diagnostic(&error, &buffer, label))?;
            Ok(Outcome::Rejected)
        }
    }
}

/// Read and tokenize one file. The report labels it with its quoted path.
pub fn lex_file<O: Write, E: Write>(
    path: &Path,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> Result<Outcome, CommandError> {
    let source = read_file(path)?;
    let outcome = lex_source(&source, &file_label(path), out, emitter)?;
    emitter.flush()?;
    Ok(outcome)
}

/// Interactive loop: prompt, read a line, tokenize it on its own.
///
/// Each line gets a fresh buffer, so indentation never carries over between
/// lines. Errors are reported and the loop goes on; end of input stops it.
pub fn repl<I: BufRead, O: Write, E: Write>(
    mut input: I,
    out: &mut O,
    emitter: &mut TerminalEmitter<E>,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let source = line.strip_suffix('\n').unwrap_or(&line);
        let source = source.strip_suffix('\r').unwrap_or(source);

        lex_source(source, STDIN_LABEL, out, emitter)?;
        emitter.flush()?;
    }
}

pub fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::InvalidData => CommandError::InvalidUtf8(path.to_path_buf()),
        _ => CommandError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
