//! The Expy driver.
//!
//! Reads a file or interactive lines, tokenizes them with [`expy_lexer`]
//! and prints either the tokens or a rendered lexical error. The `expy`
//! binary is a thin wrapper around [`commands`].

use std::sync::Once;

pub mod commands;
pub mod config;
pub mod reporting;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=expy_lexer=debug` or `RUST_LOG=expy_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_indent_lines(true);
            tracing_subscriber::registry().with(tree).with(filter).init();
        }
    });
}
