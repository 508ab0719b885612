//! Low-level scanning primitives for Expy source.
//!
//! [`SourceBuffer`] owns the source text followed by a newline and a `0x00`
//! sentinel. [`Cursor`] walks it byte by byte; the sentinel lets every rule
//! detect end-of-line and end-of-input with ordinary byte comparisons instead
//! of bounds checks.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
