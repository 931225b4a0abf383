//! Command handlers for the Rill CLI.
//!
//! Shared helpers such as [`load_source`] live in the module root.

use rill_lexer_core::SourceBuffer;

mod lex;

pub use lex::{
    lex_file, lex_source, parse_lex_options, render_lex_error, render_tokens, LexOptions,
    TokenFormat,
};

/// Read a source file, or print the failure and exit with status 1.
pub(crate) fn load_source(path: &str) -> SourceBuffer {
    match SourceBuffer::from_path(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::debug!(path, error = %err, "failed to load source");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
