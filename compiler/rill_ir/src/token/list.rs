//! Sentinel-terminated token list.

use std::ops::Index;

use super::{Token, TokenKind};

/// An owned token sequence whose last element is always [`TokenKind::Eof`].
///
/// The syntax stage walks the list by index and may look ahead past the
/// last real token; [`at`](Self::at) hands back the end-of-input sentinel
/// instead of going out of bounds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a list from the scanned tokens plus the terminating sentinel.
    ///
    /// `tokens` must not itself contain an end-of-input token.
    pub fn with_eof(mut tokens: Vec<Token>, eof: Token) -> Self {
        debug_assert!(
            tokens.iter().all(|t| !t.is_eof()),
            "end-of-input token before the end of the stream"
        );
        debug_assert!(eof.is_eof(), "sentinel must be an end-of-input token");
        tokens.push(eof);
        TokenList { tokens }
    }

    /// Number of tokens, including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: the sentinel is present even for empty source.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Token at `index`, or the end-of-input sentinel for any index past
    /// the end.
    #[inline]
    pub fn at(&self, index: usize) -> &Token {
        match self.tokens.get(index) {
            Some(token) => token,
            None => self.eof(),
        }
    }

    /// The terminating end-of-input token.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, in order. Handy for tests and quick dumps.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
