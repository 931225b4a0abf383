//! Operator and punctuation tables.
//!
//! Two static tables drive the operator scanner:
//! - [`SINGLE_CHAR`]: every byte that starts an operator or punctuation token
//! - [`TWO_CHAR`]: the pairs matched greedily before falling back to one byte
//!
//! Every byte of every [`TWO_CHAR`] entry appears in [`SINGLE_CHAR`], so a
//! pair that does not match can always be emitted as its first byte alone.
//! `&` and `|` only exist to lead `&&` and `||`; on their own they map to
//! [`TokenKind::Unknown`].

use rill_ir::TokenKind;

/// Single-byte operators and punctuation.
pub const SINGLE_CHAR: [(u8, TokenKind); 20] = [
    (b'(', TokenKind::LParen),
    (b')', TokenKind::RParen),
    (b'{', TokenKind::LBrace),
    (b'}', TokenKind::RBrace),
    (b'[', TokenKind::LBracket),
    (b']', TokenKind::RBracket),
    (b',', TokenKind::Comma),
    (b';', TokenKind::Semicolon),
    (b':', TokenKind::Colon),
    (b'+', TokenKind::Plus),
    (b'-', TokenKind::Minus),
    (b'*', TokenKind::Star),
    (b'/', TokenKind::Slash),
    (b'%', TokenKind::Percent),
    (b'!', TokenKind::Bang),
    (b'=', TokenKind::Eq),
    (b'>', TokenKind::Gt),
    (b'<', TokenKind::Lt),
    (b'&', TokenKind::Unknown),
    (b'|', TokenKind::Unknown),
];

/// Two-byte operators. There are no longer ones.
pub const TWO_CHAR: [(&str, TokenKind); 8] = [
    ("**", TokenKind::StarStar),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    (">=", TokenKind::GtEq),
    ("<=", TokenKind::LtEq),
    ("//", TokenKind::SlashSlash),
];

/// Kind of the single-byte token starting with `byte`, if it is one.
#[inline]
pub fn single_char(byte: u8) -> Option<TokenKind> {
    SINGLE_CHAR
        .iter()
        .find(|&&(b, _)| b == byte)
        .map(|&(_, kind)| kind)
}

/// Whether `byte` begins an operator or punctuation token.
#[inline]
pub fn is_operator_start(byte: u8) -> bool {
    single_char(byte).is_some()
}

/// Kind of the two-byte operator `first second`, if it is one.
#[inline]
pub fn two_char(first: u8, second: u8) -> Option<TokenKind> {
    TWO_CHAR
        .iter()
        .find(|(text, _)| text.as_bytes() == [first, second])
        .map(|&(_, kind)| kind)
}
