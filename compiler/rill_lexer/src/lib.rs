//! Lexer for the Rill front end.
//!
//! Turns source text into a [`TokenList`] terminated by an end-of-input
//! token. Scanning stops at the first [`LexError`]; callers get either
//! every token or the error, never a partial list.
//!
//! The low-level input layer (source buffer, byte cursor) lives in
//! `rill_lexer_core`; this crate adds classification: the keyword and
//! operator tables, escape decoding, and the error type.

mod escape;
mod keywords;
pub mod lex_error;
pub mod operators;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use rill_ir::{Span, Token, TokenKind, TokenList};
pub use rill_lexer_core::{Position, SourceBuffer};

use scanner::Scanner;

/// Tokenize a named source buffer.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(source = source.name(), bytes = source.len())
)]
pub fn lex(source: &SourceBuffer) -> Result<TokenList, LexError> {
    let mut scanner = Scanner::new(source.cursor());
    let mut tokens = Vec::new();

    loop {
        match scanner.next_token() {
            Ok(Some(token)) => {
                tracing::trace!(token = ?token);
                tokens.push(token);
            }
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(error = %err, "lexing failed");
                return Err(err);
            }
        }
    }

    let list = TokenList::with_eof(tokens, scanner.eof_token());
    tracing::debug!(tokens = list.len(), "lexed");
    Ok(list)
}

/// Tokenize in-memory source text.
///
/// The last element of the result is always the end-of-input token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let buf = SourceBuffer::new("<input>", source);
    lex(&buf).map(TokenList::into_vec)
}

/// Classify a word as a keyword, type name, or identifier.
pub fn classify(lexeme: &str) -> TokenKind {
    keywords::lookup(lexeme).unwrap_or(TokenKind::Ident)
}
