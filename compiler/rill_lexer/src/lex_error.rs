//! Lexer error types.
//!
//! Every lexical error is fatal: the scan stops at the first one and no
//! partial token list is returned. The error points at the start of the
//! offending construct (the opening quote of a literal, the first byte of a
//! malformed number), not at the byte where the problem was noticed.

use std::fmt;

use rill_lexer_core::Position;

/// A fatal lexical error with its source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// 1-based line of the construct's first character.
    pub line: u32,
    /// 1-based column of the construct's first character.
    pub column: u32,
    /// Byte offset of the construct's first character.
    pub offset: u32,
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"` for string literal.
    UnterminatedString,
    /// Missing closing `'` for char literal.
    UnterminatedChar,
    /// A `\` as the last byte of the input.
    UnterminatedEscape,
    /// Empty char literal `''`.
    EmptyCharLiteral,
    /// Multiple characters in char literal `'ab'`.
    MultiCharLiteral,
    /// A `.` with no digits on either side.
    InvalidNumber,
}

impl LexError {
    fn at(kind: LexErrorKind, start: Position) -> Self {
        LexError {
            kind,
            line: start.line,
            column: start.column,
            offset: start.offset,
        }
    }

    #[cold]
    pub fn unterminated_string(start: Position) -> Self {
        Self::at(LexErrorKind::UnterminatedString, start)
    }

    #[cold]
    pub fn unterminated_char(start: Position) -> Self {
        Self::at(LexErrorKind::UnterminatedChar, start)
    }

    #[cold]
    pub fn unterminated_escape(start: Position) -> Self {
        Self::at(LexErrorKind::UnterminatedEscape, start)
    }

    #[cold]
    pub fn empty_char_literal(start: Position) -> Self {
        Self::at(LexErrorKind::EmptyCharLiteral, start)
    }

    #[cold]
    pub fn multi_char_literal(start: Position) -> Self {
        Self::at(LexErrorKind::MultiCharLiteral, start)
    }

    #[cold]
    pub fn invalid_number(start: Position) -> Self {
        Self::at(LexErrorKind::InvalidNumber, start)
    }

    /// The bare message, without the position suffix.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// A short hint on how to fix the input.
    pub fn help(&self) -> &'static str {
        self.kind.help()
    }
}

impl LexErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "unterminated string literal",
            LexErrorKind::UnterminatedChar => "unterminated character literal",
            LexErrorKind::UnterminatedEscape => "unterminated escape sequence",
            LexErrorKind::EmptyCharLiteral => "character literal cannot be empty",
            LexErrorKind::MultiCharLiteral => {
                "character literal must contain exactly one character"
            }
            LexErrorKind::InvalidNumber => "invalid number",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "add a closing `\"` to end the string",
            LexErrorKind::UnterminatedChar => "add a closing `'` to end the character literal",
            LexErrorKind::UnterminatedEscape => {
                "a `\\` must be followed by the character it escapes"
            }
            LexErrorKind::EmptyCharLiteral => {
                "write the character between the quotes, e.g. `' '` for a space"
            }
            LexErrorKind::MultiCharLiteral => "use double quotes for text: `\"...\"`",
            LexErrorKind::InvalidNumber => "a number needs at least one digit, e.g. `0.5`",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
