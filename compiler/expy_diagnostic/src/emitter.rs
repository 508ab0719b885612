//! Terminal emitter.
//!
//! Renders a [`Diagnostic`] as
//!
//! ```text
//! Lexical error:
//!  Bad string near "'" in "demo.expy", line 3, column 5.
//! ```
//!
//! with the title in red when colors are enabled.

use std::io::{self, Write};

use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter.
    ///
    /// `is_tty` tells whether `writer` is a terminal; it decides colors
    /// under [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write one diagnostic.
    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if self.colors {
            write!(
                self.writer,
                "{}{}{}",
                colors::ERROR,
                diagnostic.title,
                colors::RESET
            )?;
        } else {
            write!(self.writer, "{}", diagnostic.title)?;
        }
        writeln!(
            self.writer,
            ":\n {} near {} in {}, line {}, column {}.",
            diagnostic.message, diagnostic.near, diagnostic.file, diagnostic.line, diagnostic.column
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
