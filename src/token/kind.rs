//! The TokenKind trait for token type tags.

use std::fmt::Debug;

/// Trait for the type tag carried by a [`Token`](crate::Token).
///
/// A kind is a small, copyable-ish classification value, almost always a
/// plain enum. `name` supplies the label used when rendering tokens and
/// streams; the [`token_kind!`](crate::token_kind) macro generates both
/// the derives and this impl for simple enums.
///
/// # Example
///
/// ```rust
/// use statewalk::TokenKind;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Kind {
///     Word,
///     Space,
/// }
///
/// impl TokenKind for Kind {
///     fn name(&self) -> &str {
///         match self {
///             Self::Word => "Word",
///             Self::Space => "Space",
///         }
///     }
/// }
///
/// assert_eq!(Kind::Word.name(), "Word");
/// ```
pub trait TokenKind: Clone + PartialEq + Debug + Send + Sync {
    /// The kind's label for rendering and logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestKind {
        Number,
        Operator,
    }

    impl TokenKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Number => "Number",
                Self::Operator => "Operator",
            }
        }
    }

    #[test]
    fn name_returns_the_label() {
        assert_eq!(TestKind::Number.name(), "Number");
        assert_eq!(TestKind::Operator.name(), "Operator");
    }

    #[test]
    fn kinds_compare_by_equality() {
        assert_eq!(TestKind::Number, TestKind::Number);
        assert_ne!(TestKind::Number, TestKind::Operator);
    }
}
