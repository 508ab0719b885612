//! Diagnostics for the Expy front end.
//!
//! The tokenizer reports a byte offset and a plain message. This crate turns
//! that into something a person can read:
//! - [`span_utils`] maps offsets to 1-based line and column
//! - [`Diagnostic`] holds a located, capitalized report
//! - [`TerminalEmitter`] renders it, optionally in color

mod diagnostic;
pub mod emitter;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, TerminalEmitter};
