//! Token types for the Rill lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A classified, positioned unit of source text.
///
/// `line` and `column` are 1-based and point at the token's first
/// character (the opening quote for literals). `lexeme` is the recognized
/// text; for string and character literals it is the decoded content,
/// without quotes and with escapes resolved.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        line: u32,
        column: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            span,
        }
    }

    /// The end-of-input sentinel at the given position.
    pub fn eof(line: u32, column: u32, offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line,
            column,
            span: Span::point(offset),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// One line of the token dump.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token: {} | Type: {} | Line: {} | Column: {}",
            self.lexeme.escape_debug(),
            self.kind.name(),
            self.line,
            self.column
        )
    }
}
