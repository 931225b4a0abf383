//! Token kinds for Rill.

use std::fmt;

/// The closed set of lexical forms.
///
/// Kinds carry no payload: the token's text lives in [`Token::lexeme`].
/// Adding a lexical form means adding a variant here and one entry in the
/// matching lexer table.
///
/// [`Token::lexeme`]: crate::Token::lexeme
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    Print,
    If,
    Else,
    Read,
    While,
    For,
    Function,
    Var,
    Return,
    True,
    False,

    // Delimiters
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :

    // Operators
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Percent,    // %
    StarStar,   // **
    AndAnd,     // &&
    OrOr,       // ||
    Bang,       // !
    SlashSlash, // //
    Eq,         // =
    EqEq,       // ==
    NotEq,      // !=
    Gt,         // >
    GtEq,       // >=
    Lt,         // <
    LtEq,       // <=

    // Primitive type names
    IntType,    // int
    FloatType,  // float
    StringType, // string
    BoolType,   // bool
    CharType,   // char

    // Literals and identifiers
    Ident,
    IntLit,
    FloatLit,
    StrLit,
    CharLit,

    /// End of input. Always the last token of a lexed stream.
    Eof,
    /// A single character no other rule recognizes.
    Unknown,
}

impl TokenKind {
    /// Every variant, in declaration order.
    pub const ALL: [TokenKind; 49] = [
        TokenKind::Print,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Read,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Function,
        TokenKind::Var,
        TokenKind::Return,
        TokenKind::True,
        TokenKind::False,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::StarStar,
        TokenKind::AndAnd,
        TokenKind::OrOr,
        TokenKind::Bang,
        TokenKind::SlashSlash,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::IntType,
        TokenKind::FloatType,
        TokenKind::StringType,
        TokenKind::BoolType,
        TokenKind::CharType,
        TokenKind::Ident,
        TokenKind::IntLit,
        TokenKind::FloatLit,
        TokenKind::StrLit,
        TokenKind::CharLit,
        TokenKind::Eof,
        TokenKind::Unknown,
    ];

    /// Upper-snake name used in token dumps (`KEY_IF`, `LEQUAL_OP`, `STR_LIT`).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Print => "KEY_PRINT",
            TokenKind::If => "KEY_IF",
            TokenKind::Else => "KEY_ELSE",
            TokenKind::Read => "KEY_READ",
            TokenKind::While => "KEY_WHILE",
            TokenKind::For => "KEY_FOR",
            TokenKind::Function => "KEY_FUNCTION",
            TokenKind::Var => "KEY_VAR",
            TokenKind::Return => "KEY_RETURN",
            TokenKind::True => "KEY_TRUE",
            TokenKind::False => "KEY_FALSE",
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::LBracket => "LEFT_BRACKET",
            TokenKind::RBracket => "RIGHT_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Plus => "ADD_OP",
            TokenKind::Minus => "SUB_OP",
            TokenKind::Star => "MUL_OP",
            TokenKind::Slash => "DIV_OP",
            TokenKind::Percent => "MOD_OP",
            TokenKind::StarStar => "POW_OP",
            TokenKind::AndAnd => "AND_OP",
            TokenKind::OrOr => "OR_OP",
            TokenKind::Bang => "NOT_OP",
            TokenKind::SlashSlash => "INT_DIV_OP",
            TokenKind::Eq => "ASSIGN_OP",
            TokenKind::EqEq => "EQUAL_OP",
            TokenKind::NotEq => "NOT_EQUAL_OP",
            TokenKind::Gt => "GREATER_OP",
            TokenKind::GtEq => "GEQUAL_OP",
            TokenKind::Lt => "LESSER_OP",
            TokenKind::LtEq => "LEQUAL_OP",
            TokenKind::IntType => "DATATYPE_INT",
            TokenKind::FloatType => "DATATYPE_FLOAT",
            TokenKind::StringType => "DATATYPE_STRING",
            TokenKind::BoolType => "DATATYPE_BOOL",
            TokenKind::CharType => "DATATYPE_CHAR",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::IntLit => "INT_LIT",
            TokenKind::FloatLit => "FLOAT_LIT",
            TokenKind::StrLit => "STR_LIT",
            TokenKind::CharLit => "CHAR_LIT",
            TokenKind::Eof => "END_OF_FILE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable form for error messages.
    ///
    /// Fixed-text kinds render as their source text; classes of tokens
    /// render as a description.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Print => "print",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Read => "read",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Var => "var",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::SlashSlash => "//",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::IntType => "int",
            TokenKind::FloatType => "float",
            TokenKind::StringType => "string",
            TokenKind::BoolType => "bool",
            TokenKind::CharType => "char",
            TokenKind::Ident => "identifier",
            TokenKind::IntLit => "integer literal",
            TokenKind::FloatLit => "float literal",
            TokenKind::StrLit => "string literal",
            TokenKind::CharLit => "character literal",
            TokenKind::Eof => "end of file",
            TokenKind::Unknown => "unknown character",
        }
    }

    /// Returns `true` for the statement/value keywords (not type names).
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Print
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Read
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::Var
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Returns `true` for the primitive type names.
    pub const fn is_type_name(self) -> bool {
        matches!(
            self,
            TokenKind::IntType
                | TokenKind::FloatType
                | TokenKind::StringType
                | TokenKind::BoolType
                | TokenKind::CharType
        )
    }

    /// Returns `true` for the literal classes (identifiers excluded).
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLit | TokenKind::FloatLit | TokenKind::StrLit | TokenKind::CharLit
        )
    }

    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::StarStar
                | TokenKind::AndAnd
                | TokenKind::OrOr
                | TokenKind::Bang
                | TokenKind::SlashSlash
                | TokenKind::Eq
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::Lt
                | TokenKind::LtEq
        )
    }

    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
