//! Expy command-line tool.
//!
//! `expy FILE` tokenizes a file, `expy` alone starts an interactive prompt.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use expy_diagnostic::TerminalEmitter;
use expyc::commands::{lex_file, repl, Outcome};
use expyc::config::{Config, Mode, USAGE};

fn main() -> ExitCode {
    expyc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config.with_no_color(std::env::var("NO_COLOR").ok().as_deref()),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(io::stderr(), config.color, is_tty);
    let mut stdout = io::stdout().lock();

    match config.mode {
        Mode::File(path) => match lex_file(&path, &mut stdout, &mut emitter) {
            Ok(Outcome::Tokenized) => ExitCode::SUCCESS,
            Ok(Outcome::Rejected) => ExitCode::FAILURE,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
        Mode::Interactive => match repl(io::stdin().lock(), &mut stdout, &mut emitter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}
