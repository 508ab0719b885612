//! Command-line configuration.
//!
//! There are no config files: everything comes from the arguments and the
//! `NO_COLOR` environment variable.

use std::path::PathBuf;

use expy_diagnostic::ColorMode;
use thiserror::Error;

pub const USAGE: &str = "usage: expy [file.expy]";

/// What the driver reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Tokenize one file.
    File(PathBuf),
    /// Prompt for lines on stdin, tokenizing each on its own.
    Interactive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub color: ColorMode,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("expected at most one file, got {0}")]
    TooManyFiles(usize),
    #[error("unknown color mode '{0}' (expected auto, always or never)")]
    BadColor(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl Config {
    /// Parse the arguments after the program name.
    ///
    /// Accepts at most one file path and `--color=auto|always|never`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ArgsError> {
        let mut color = ColorMode::Auto;
        let mut files = Vec::new();

        for arg in args {
            let arg: &str = arg.as_ref();
            if let Some(mode) = arg.strip_prefix("--color=") {
                color = parse_color(mode)?;
            } else if arg.starts_with("--") {
                return Err(ArgsError::UnknownOption(arg.to_string()));
            } else {
                files.push(arg);
            }
        }

        let mode = match files.as_slice() {
            [] => Mode::Interactive,
            [file] => Mode::File(PathBuf::from(*file)),
            more => return Err(ArgsError::TooManyFiles(more.len())),
        };
        Ok(Config { mode, color })
    }

    /// Apply the `NO_COLOR` convention: a non-empty value turns
    /// [`ColorMode::Auto`] into [`ColorMode::Never`]. Explicit modes win.
    #[must_use]
    pub fn with_no_color(mut self, no_color: Option<&str>) -> Self {
        if self.color == ColorMode::Auto && no_color.is_some_and(|v| !v.is_empty()) {
            self.color = ColorMode::Never;
        }
        self
    }
}

fn parse_color(mode: &str) -> Result<ColorMode, ArgsError> {
    match mode {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(ArgsError::BadColor(other.to_string())),
    }
}
