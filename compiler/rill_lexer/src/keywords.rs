//! Keyword table.
//!
//! Statement keywords and primitive type names share one table: both are
//! reserved words the identifier scanner must not hand out as identifiers.
//! The lookup uses the identifier's length as a first-pass filter (keywords
//! range from 2-8 chars), then matches against the keywords of that length.

use rill_ir::TokenKind;

/// Look up a reserved word by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 2-8 chars and start with a lowercase letter
    if !(2..=8).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::IntType),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "bool" => Some(TokenKind::BoolType),
            "char" => Some(TokenKind::CharType),
            "else" => Some(TokenKind::Else),
            "read" => Some(TokenKind::Read),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            "float" => Some(TokenKind::FloatType),
            "print" => Some(TokenKind::Print),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            "string" => Some(TokenKind::StringType),
            _ => None,
        },
        8 => match text {
            "function" => Some(TokenKind::Function),
            _ => None,
        },
        _ => None,
    }
}
