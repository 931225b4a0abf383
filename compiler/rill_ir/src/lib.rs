//! Rill IR - token vocabulary for the Rill front end.
//!
//! This crate holds the data the lexer produces and the syntax stage
//! consumes:
//! - Spans for byte ranges in the source
//! - `TokenKind`, the closed set of lexical forms
//! - `Token` and `TokenList` for lexer output
//!
//! It contains no scanning logic. Tools that only need to inspect a token
//! stream can depend on it without pulling in the lexer.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
