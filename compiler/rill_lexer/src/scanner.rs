//! Hand-written scanner producing one [`Token`] at a time.
//!
//! The scanner owns a [`Cursor`] and dispatches on the first byte of each
//! token. It never backtracks: two-character operators are decided with one
//! byte of lookahead, and every sub-scanner consumes exactly the bytes of
//! the token it returns.
//!
//! Whitespace is skipped before each token and produces nothing. The first
//! fatal condition ends the scan with a [`LexError`] positioned at the start
//! of the offending construct.

use rill_ir::{Span, Token, TokenKind};
use rill_lexer_core::{Cursor, Position};

use crate::escape::push_escape;
use crate::lex_error::LexError;
use crate::operators;

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next token, or `Ok(None)` once the source is exhausted.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return Ok(None);
        }

        let start = self.cursor.position();
        let token = match self.cursor.current() {
            quote @ (b'"' | b'\'') => self.quoted(start, quote)?,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' | b'.' => self.number(start)?,
            b if operators::is_operator_start(b) => self.operator(start, b),
            _ => self.unknown(start),
        };
        Ok(Some(token))
    }

    /// The end-of-input token at the current position.
    ///
    /// Called after [`next_token`](Self::next_token) returns `Ok(None)`, so
    /// trailing whitespace has already been consumed.
    pub(crate) fn eof_token(&self) -> Token {
        Token::eof(self.cursor.line(), self.cursor.column(), self.cursor.pos())
    }

    fn token(&self, kind: TokenKind, lexeme: impl Into<String>, start: Position) -> Token {
        Token::new(
            kind,
            lexeme,
            start.line,
            start.column,
            Span::new(start.offset, self.cursor.pos()),
        )
    }

    // Identifiers and keywords

    fn identifier(&mut self, start: Position) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start.offset);
        self.token(crate::classify(text), text, start)
    }

    // Numbers

    /// Digits with at most one `.`; the first `.` makes the literal a float.
    fn number(&mut self, start: Position) -> Result<Token, LexError> {
        let mut kind = TokenKind::IntLit;
        loop {
            match self.cursor.current() {
                b'0'..=b'9' => self.cursor.advance(),
                b'.' if kind == TokenKind::IntLit => {
                    kind = TokenKind::FloatLit;
                    self.cursor.advance();
                }
                _ => break,
            }
        }

        let text = self.cursor.slice_from(start.offset);
        if text.is_empty() || text == "." {
            return Err(LexError::invalid_number(start));
        }
        Ok(self.token(kind, text, start))
    }

    // Operators and punctuation

    fn operator(&mut self, start: Position, first: u8) -> Token {
        // Decide on the pair before consuming anything.
        let kind = match operators::two_char(first, self.cursor.peek()) {
            Some(kind) => {
                self.cursor.advance();
                self.cursor.advance();
                kind
            }
            None => {
                self.cursor.advance();
                operators::single_char(first).unwrap_or(TokenKind::Unknown)
            }
        };
        self.token(kind, self.cursor.slice_from(start.offset), start)
    }

    fn unknown(&mut self, start: Position) -> Token {
        // Non-ASCII input is consumed as one whole character.
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start.offset);
        tracing::debug!(
            line = start.line,
            column = start.column,
            text = %text.escape_debug(),
            "unknown character"
        );
        self.token(TokenKind::Unknown, text, start)
    }

    // String and character literals

    /// Scan a literal opened by `quote`, decoding escapes into the lexeme.
    ///
    /// Raw newlines are part of the literal. Unrecognized escapes keep their
    /// backslash.
    fn quoted(&mut self, start: Position, quote: u8) -> Result<Token, LexError> {
        let is_char = quote == b'\'';
        let unterminated = |start: Position| {
            if is_char {
                LexError::unterminated_char(start)
            } else {
                LexError::unterminated_string(start)
            }
        };

        self.cursor.advance(); // opening quote
        let mut lexeme = String::new();
        loop {
            let chunk_start = self.cursor.pos();
            let b = self.cursor.skip_to_literal_delim(quote);
            lexeme.push_str(self.cursor.slice_from(chunk_start));

            if self.cursor.is_eof() {
                return Err(unterminated(start));
            }
            match b {
                b'\\' => {
                    self.cursor.advance();
                    let Some(escaped) = self.cursor.advance_char() else {
                        return Err(LexError::unterminated_escape(start));
                    };
                    push_escape(&mut lexeme, escaped);
                }
                b'\n' => {
                    self.cursor.advance();
                    lexeme.push('\n');
                }
                _ => {
                    debug_assert_eq!(b, quote, "literal scan stopped on an unexpected byte");
                    self.cursor.advance(); // closing quote
                    break;
                }
            }
        }

        if is_char {
            let mut chars = lexeme.chars();
            match (chars.next(), chars.next()) {
                (None, _) => return Err(LexError::empty_char_literal(start)),
                (Some(_), Some(_)) => return Err(LexError::multi_char_literal(start)),
                (Some(_), None) => {}
            }
            Ok(self.token(TokenKind::CharLit, lexeme, start))
        } else {
            Ok(self.token(TokenKind::StrLit, lexeme, start))
        }
    }
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
