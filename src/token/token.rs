//! The token value: a kind tag plus literal text.

use super::kind::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A kind and lexeme pair.
///
/// Tokens are what transition actions typically emit while a machine
/// classifies input: the kind says what a run of input was, the lexeme
/// preserves its literal text. The engine itself never touches this type.
///
/// # Example
///
/// ```rust
/// use statewalk::{token_kind, Token};
///
/// token_kind! {
///     enum Kind {
///         Number,
///         Comma,
///     }
/// }
///
/// let token = Token::new(Kind::Number, "42");
/// assert_eq!(token.kind, Kind::Number);
/// assert_eq!(token.lexeme, "42");
/// assert_eq!(token.to_string(), "Number | 42");
///
/// let bare = Token::empty(Kind::Comma);
/// assert!(bare.lexeme.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token<K: TokenKind> {
    /// What this token is.
    pub kind: K,
    /// The literal text it was read from.
    pub lexeme: String,
}

impl<K: TokenKind> Token<K> {
    /// Create a token with a kind and lexeme.
    pub fn new(kind: K, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Create a token with an empty lexeme.
    ///
    /// Useful for kinds whose text carries no information, like
    /// punctuation.
    pub fn empty(kind: K) -> Self {
        Token {
            kind,
            lexeme: String::new(),
        }
    }
}

impl<K: TokenKind> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.kind.name(), self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_kind;

    token_kind! {
        enum TestKind {
            Word,
            Space,
        }
    }

    #[test]
    fn new_stores_kind_and_lexeme() {
        let token = Token::new(TestKind::Word, "hello");

        assert_eq!(token.kind, TestKind::Word);
        assert_eq!(token.lexeme, "hello");
    }

    #[test]
    fn empty_has_no_lexeme() {
        let token = Token::empty(TestKind::Space);

        assert_eq!(token.kind, TestKind::Space);
        assert!(token.lexeme.is_empty());
    }

    #[test]
    fn display_renders_name_and_lexeme() {
        let token = Token::new(TestKind::Word, "abc");

        assert_eq!(token.to_string(), "Word | abc");
    }

    #[test]
    fn token_round_trips_through_json() {
        let token = Token::new(TestKind::Word, "xyz");

        let json = serde_json::to_string(&token).unwrap();
        let back: Token<TestKind> = serde_json::from_str(&json).unwrap();

        assert_eq!(token, back);
    }
}
