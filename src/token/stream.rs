//! Ordered token collections and their utility operations.

use super::kind::TokenKind;
use super::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// An ordered collection of tokens with the operations that make
/// tokenizing and parsing easier.
///
/// A stream is usually filled by transition actions during a run, then
/// cleaned up and carved apart by the caller: dropping noise kinds,
/// collapsing runs, trimming delimiters, splitting on separators.
///
/// The stream derefs to a token slice, so all the usual slice reads
/// (`len`, `iter`, `first`, `last`, indexing, sub-slicing) apply.
///
/// # Example
///
/// ```rust
/// use statewalk::{token_kind, Token, TokenStream};
///
/// token_kind! {
///     enum Kind {
///         Word,
///         Space,
///     }
/// }
///
/// let mut stream = TokenStream::new();
/// stream.emit(Kind::Word, "fn");
/// stream.emit_char(Kind::Space, ' ');
/// stream.emit(Kind::Word, "main");
///
/// assert_eq!(stream.len(), 3);
/// stream.remove_kind(&Kind::Space);
/// assert_eq!(stream.len(), 2);
/// assert_eq!(stream[1].lexeme, "main");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenStream<K: TokenKind> {
    tokens: Vec<Token<K>>,
}

impl<K: TokenKind> TokenStream<K> {
    /// Create an empty stream.
    pub fn new() -> Self {
        TokenStream { tokens: Vec::new() }
    }

    /// Append a token.
    pub fn push(&mut self, token: Token<K>) {
        self.tokens.push(token);
    }

    /// Append a token built from a kind and lexeme.
    pub fn emit(&mut self, kind: K, lexeme: impl Into<String>) {
        self.push(Token::new(kind, lexeme));
    }

    /// Append a token whose lexeme is a single character.
    pub fn emit_char(&mut self, kind: K, c: char) {
        self.push(Token::new(kind, c.to_string()));
    }

    /// Append a token with an empty lexeme.
    pub fn emit_empty(&mut self, kind: K) {
        self.push(Token::empty(kind));
    }

    /// Index of the first token of a kind.
    pub fn index_of(&self, kind: &K) -> Option<usize> {
        self.index_of_from(kind, 0)
    }

    /// Index of the first token of a kind at or after `start`.
    ///
    /// A `start` past the end simply finds nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{token_kind, TokenStream};
    ///
    /// token_kind! {
    ///     enum Kind { A, B }
    /// }
    ///
    /// let mut stream = TokenStream::new();
    /// stream.emit_empty(Kind::A);
    /// stream.emit_empty(Kind::B);
    /// stream.emit_empty(Kind::A);
    ///
    /// assert_eq!(stream.index_of(&Kind::A), Some(0));
    /// assert_eq!(stream.index_of_from(&Kind::A, 1), Some(2));
    /// assert_eq!(stream.index_of_from(&Kind::A, 3), None);
    /// ```
    pub fn index_of_from(&self, kind: &K, start: usize) -> Option<usize> {
        self.tokens
            .iter()
            .skip(start)
            .position(|t| t.kind == *kind)
            .map(|offset| start + offset)
    }

    /// Remove every token of a kind.
    pub fn remove_kind(&mut self, kind: &K) {
        self.tokens.retain(|t| t.kind != *kind);
    }

    /// Collapse each consecutive run of a kind down to its first token.
    ///
    /// Lexemes of the dropped tokens are lost; only the first of each run
    /// survives. Other kinds are untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{token_kind, TokenStream};
    ///
    /// token_kind! {
    ///     enum Kind { Word, Space }
    /// }
    ///
    /// let mut stream = TokenStream::new();
    /// stream.emit(Kind::Word, "a");
    /// stream.emit(Kind::Space, " ");
    /// stream.emit(Kind::Space, "  ");
    /// stream.emit(Kind::Word, "b");
    ///
    /// stream.collapse(&Kind::Space);
    ///
    /// assert_eq!(stream.len(), 3);
    /// assert_eq!(stream[1].lexeme, " ");
    /// ```
    pub fn collapse(&mut self, kind: &K) {
        self.tokens
            .dedup_by(|current, previous| current.kind == *kind && previous.kind == *kind);
    }

    /// Copy the sub-range from `start` to `last`, both inclusive.
    ///
    /// A `last` beyond the end is clamped to the final token; a `start`
    /// past the end or past `last` yields an empty stream.
    pub fn segment(&self, start: usize, last: usize) -> Self {
        let end = usize::min(self.tokens.len(), last.saturating_add(1));
        if start >= end {
            return Self::new();
        }
        TokenStream {
            tokens: self.tokens[start..end].to_vec(),
        }
    }

    /// Split into sub-streams on a delimiter kind.
    ///
    /// Delimiter tokens are dropped; empty segments are kept, so `n`
    /// delimiters always produce `n + 1` streams, like `str::split`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{token_kind, TokenStream};
    ///
    /// token_kind! {
    ///     enum Kind { Field, Comma }
    /// }
    ///
    /// let mut stream = TokenStream::new();
    /// stream.emit(Kind::Field, "a");
    /// stream.emit_empty(Kind::Comma);
    /// stream.emit_empty(Kind::Comma);
    /// stream.emit(Kind::Field, "b");
    ///
    /// let parts = stream.split(&Kind::Comma);
    ///
    /// assert_eq!(parts.len(), 3);
    /// assert_eq!(parts[0][0].lexeme, "a");
    /// assert!(parts[1].is_empty());
    /// assert_eq!(parts[2][0].lexeme, "b");
    /// ```
    pub fn split(&self, kind: &K) -> Vec<Self> {
        let mut parts = Vec::new();
        let mut current = Self::new();
        for token in &self.tokens {
            if token.kind == *kind {
                parts.push(std::mem::take(&mut current));
            } else {
                current.tokens.push(token.clone());
            }
        }
        parts.push(current);
        parts
    }

    /// Whether the first token is of a kind. False when empty.
    pub fn starts_with(&self, kind: &K) -> bool {
        self.tokens.first().is_some_and(|t| t.kind == *kind)
    }

    /// Whether the last token is of a kind. False when empty.
    pub fn ends_with(&self, kind: &K) -> bool {
        self.tokens.last().is_some_and(|t| t.kind == *kind)
    }

    /// Remove leading tokens of a kind, in place.
    pub fn trim_start(&mut self, kind: &K) {
        let leading = self
            .tokens
            .iter()
            .take_while(|t| t.kind == *kind)
            .count();
        self.tokens.drain(..leading);
    }

    /// Remove trailing tokens of a kind, in place.
    pub fn trim_end(&mut self, kind: &K) {
        let trailing = self
            .tokens
            .iter()
            .rev()
            .take_while(|t| t.kind == *kind)
            .count();
        self.tokens.truncate(self.tokens.len() - trailing);
    }

    /// Remove leading and trailing tokens of a kind, in place.
    pub fn trim(&mut self, kind: &K) {
        self.trim_start(kind);
        self.trim_end(kind);
    }
}

impl<K: TokenKind> Default for TokenStream<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TokenKind> Deref for TokenStream<K> {
    type Target = [Token<K>];

    fn deref(&self) -> &[Token<K>] {
        &self.tokens
    }
}

/// One `NAME | lexeme` line per token, each newline-terminated.
impl<K: TokenKind> fmt::Display for TokenStream<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}

impl<K: TokenKind> FromIterator<Token<K>> for TokenStream<K> {
    fn from_iter<I: IntoIterator<Item = Token<K>>>(iter: I) -> Self {
        TokenStream {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<K: TokenKind> Extend<Token<K>> for TokenStream<K> {
    fn extend<I: IntoIterator<Item = Token<K>>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl<K: TokenKind> IntoIterator for TokenStream<K> {
    type Item = Token<K>;
    type IntoIter = std::vec::IntoIter<Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a, K: TokenKind> IntoIterator for &'a TokenStream<K> {
    type Item = &'a Token<K>;
    type IntoIter = std::slice::Iter<'a, Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_kind;

    token_kind! {
        enum Kind {
            Word,
            Space,
            Comma,
        }
    }

    fn words_and_spaces() -> TokenStream<Kind> {
        let mut stream = TokenStream::new();
        stream.emit(Kind::Space, " ");
        stream.emit(Kind::Word, "one");
        stream.emit(Kind::Space, " ");
        stream.emit(Kind::Space, " ");
        stream.emit(Kind::Word, "two");
        stream.emit(Kind::Space, " ");
        stream
    }

    #[test]
    fn new_stream_is_empty() {
        let stream: TokenStream<Kind> = TokenStream::new();

        assert!(stream.is_empty());
        assert_eq!(stream.to_string(), "");
    }

    #[test]
    fn emit_variants_append_in_order() {
        let mut stream = TokenStream::new();
        stream.emit(Kind::Word, "hi");
        stream.emit_char(Kind::Comma, ',');
        stream.emit_empty(Kind::Space);

        assert_eq!(stream.len(), 3);
        assert_eq!(stream[0].lexeme, "hi");
        assert_eq!(stream[1].lexeme, ",");
        assert_eq!(stream[2].lexeme, "");
        assert_eq!(stream.last().unwrap().kind, Kind::Space);
    }

    #[test]
    fn index_of_finds_first_occurrence() {
        let stream = words_and_spaces();

        assert_eq!(stream.index_of(&Kind::Word), Some(1));
        assert_eq!(stream.index_of(&Kind::Comma), None);
    }

    #[test]
    fn index_of_from_searches_forward_only() {
        let stream = words_and_spaces();

        assert_eq!(stream.index_of_from(&Kind::Word, 2), Some(4));
        assert_eq!(stream.index_of_from(&Kind::Word, 5), None);
        assert_eq!(stream.index_of_from(&Kind::Word, 99), None);
    }

    #[test]
    fn remove_kind_drops_every_occurrence() {
        let mut stream = words_and_spaces();

        stream.remove_kind(&Kind::Space);

        assert_eq!(stream.len(), 2);
        assert!(stream.iter().all(|t| t.kind == Kind::Word));
    }

    #[test]
    fn collapse_keeps_first_of_each_run() {
        let mut stream = words_and_spaces();

        stream.collapse(&Kind::Space);

        let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![Kind::Space, Kind::Word, Kind::Space, Kind::Word, Kind::Space]
        );
    }

    #[test]
    fn collapse_leaves_other_kinds_alone() {
        let mut stream = TokenStream::new();
        stream.emit(Kind::Word, "a");
        stream.emit(Kind::Word, "b");

        stream.collapse(&Kind::Space);

        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn collapse_on_short_streams_is_a_no_op() {
        let mut stream = TokenStream::new();
        stream.emit(Kind::Space, " ");

        stream.collapse(&Kind::Space);

        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn segment_is_inclusive_and_clamped() {
        let stream = words_and_spaces();

        let middle = stream.segment(1, 3);
        assert_eq!(middle.len(), 3);
        assert_eq!(middle[0].lexeme, "one");

        let clamped = stream.segment(4, 100);
        assert_eq!(clamped.len(), 2);

        assert!(stream.segment(10, 20).is_empty());
        assert!(stream.segment(3, 2).is_empty());
    }

    #[test]
    fn segment_of_single_index_copies_one_token() {
        let stream = words_and_spaces();

        let one = stream.segment(1, 1);

        assert_eq!(one.len(), 1);
        assert_eq!(one[0].lexeme, "one");
    }

    #[test]
    fn split_keeps_empty_segments() {
        let mut stream = TokenStream::new();
        stream.emit_empty(Kind::Comma);
        stream.emit(Kind::Word, "a");
        stream.emit_empty(Kind::Comma);

        let parts = stream.split(&Kind::Comma);

        assert_eq!(parts.len(), 3);
        assert!(parts[0].is_empty());
        assert_eq!(parts[1][0].lexeme, "a");
        assert!(parts[2].is_empty());
    }

    #[test]
    fn split_of_empty_stream_is_one_empty_segment() {
        let stream: TokenStream<Kind> = TokenStream::new();

        let parts = stream.split(&Kind::Comma);

        assert_eq!(parts.len(), 1);
        assert!(parts[0].is_empty());
    }

    #[test]
    fn starts_and_ends_with_check_the_edges() {
        let stream = words_and_spaces();

        assert!(stream.starts_with(&Kind::Space));
        assert!(!stream.starts_with(&Kind::Word));
        assert!(stream.ends_with(&Kind::Space));

        let empty: TokenStream<Kind> = TokenStream::new();
        assert!(!empty.starts_with(&Kind::Space));
        assert!(!empty.ends_with(&Kind::Space));
    }

    #[test]
    fn trim_removes_edge_runs_only() {
        let mut stream = words_and_spaces();

        stream.trim(&Kind::Space);

        assert_eq!(stream.first().unwrap().lexeme, "one");
        assert_eq!(stream.last().unwrap().lexeme, "two");
        // Interior spaces survive.
        assert_eq!(stream.len(), 4);
    }

    #[test]
    fn trim_on_uniform_stream_empties_it() {
        let mut stream = TokenStream::new();
        stream.emit(Kind::Space, " ");
        stream.emit(Kind::Space, " ");

        stream.trim(&Kind::Space);

        assert!(stream.is_empty());
    }

    #[test]
    fn trim_start_and_end_are_independent() {
        let mut start_only = words_and_spaces();
        start_only.trim_start(&Kind::Space);
        assert_eq!(start_only.first().unwrap().lexeme, "one");
        assert!(start_only.ends_with(&Kind::Space));

        let mut end_only = words_and_spaces();
        end_only.trim_end(&Kind::Space);
        assert!(end_only.starts_with(&Kind::Space));
        assert_eq!(end_only.last().unwrap().lexeme, "two");
    }

    #[test]
    fn display_renders_one_line_per_token() {
        let mut stream = TokenStream::new();
        stream.emit(Kind::Word, "a");
        stream.emit(Kind::Comma, ",");

        assert_eq!(stream.to_string(), "Word | a\nComma | ,\n");
    }

    #[test]
    fn stream_round_trips_through_json() {
        let stream = words_and_spaces();

        let json = serde_json::to_string(&stream).unwrap();
        let back: TokenStream<Kind> = serde_json::from_str(&json).unwrap();

        assert_eq!(stream, back);
    }

    #[test]
    fn collects_from_an_iterator() {
        let stream: TokenStream<Kind> = vec![
            Token::new(Kind::Word, "x"),
            Token::new(Kind::Word, "y"),
        ]
        .into_iter()
        .collect();

        assert_eq!(stream.len(), 2);

        let lexemes: Vec<_> = (&stream).into_iter().map(|t| t.lexeme.clone()).collect();
        assert_eq!(lexemes, vec!["x", "y"]);
    }
}
