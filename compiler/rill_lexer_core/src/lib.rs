//! Low-level input layer for the Rill lexer.
//!
//! - [`SourceBuffer`]: a named, sentinel-terminated copy of the source text
//! - [`Cursor`]: a byte cursor over that buffer that tracks line and column
//!
//! Nothing here knows about tokens. The scanner in `rill_lexer` drives the
//! cursor and decides what each byte means.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, Position};
pub use source_buffer::{SourceBuffer, SourceError};
