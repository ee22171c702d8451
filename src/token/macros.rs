//! Macros for ergonomic token kind definition.

/// Generate a token kind enum with the standard derives and a
/// [`TokenKind`](crate::TokenKind) impl.
///
/// # Example
///
/// ```
/// use statewalk::{token_kind, Token, TokenKind};
///
/// token_kind! {
///     pub enum JsonKind {
///         Brace,
///         Bracket,
///         String,
///         Number,
///         Whitespace,
///     }
/// }
///
/// assert_eq!(JsonKind::Number.name(), "Number");
/// let token = Token::new(JsonKind::String, "\"hi\"");
/// assert_eq!(token.to_string(), "String | \"hi\"");
/// ```
#[macro_export]
macro_rules! token_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::token::TokenKind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
