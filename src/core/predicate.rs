//! Predicates for matching input symbols.
//!
//! A predicate is a pure boolean function over a single symbol. It decides
//! whether a transition applies to the symbol currently being processed,
//! and inspects nothing else.

use super::symbol::Symbol;

/// Pure predicate that decides whether a transition accepts a symbol.
///
/// Every way of expressing a match compiles down to the same boxed-closure
/// representation; the convenience constructors are sugar, not separate
/// runtime paths.
///
/// Predicates must be total over the symbol type: a predicate that panics
/// propagates that panic out of the run unmodified.
///
/// # Example
///
/// ```rust
/// use statewalk::Predicate;
///
/// let digit = Predicate::new(|c: &char| c.is_ascii_digit());
///
/// assert!(digit.accepts(&'7'));
/// assert!(!digit.accepts(&'x'));
/// ```
pub struct Predicate<T: Symbol> {
    test: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: Symbol> Predicate<T> {
    /// Create a predicate from an explicit function.
    ///
    /// The function must be pure (deterministic, no side effects) and
    /// thread-safe (`Send + Sync`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Predicate;
    ///
    /// let vowel = Predicate::new(|c: &char| "aeiou".contains(*c));
    /// assert!(vowel.accepts(&'e'));
    /// ```
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate {
            test: Box::new(test),
        }
    }

    /// Create a predicate that accepts exactly one symbol value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Predicate;
    ///
    /// let comma = Predicate::equals(',');
    /// assert!(comma.accepts(&','));
    /// assert!(!comma.accepts(&';'));
    /// ```
    pub fn equals(symbol: T) -> Self {
        Self::new(move |candidate| *candidate == symbol)
    }

    /// Create a predicate that accepts any symbol in a finite set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Predicate;
    ///
    /// let sign = Predicate::one_of(['+', '-']);
    /// assert!(sign.accepts(&'-'));
    /// assert!(!sign.accepts(&'*'));
    /// ```
    pub fn one_of<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let symbols: Vec<T> = symbols.into_iter().collect();
        Self::new(move |candidate| symbols.contains(candidate))
    }

    /// Create a predicate that accepts every symbol.
    ///
    /// Machines have no implicit default transition; adding a transition
    /// guarded by `Predicate::any()` as the last rule of a state is the
    /// explicit way to spell a catch-all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Predicate;
    ///
    /// let anything = Predicate::any();
    /// assert!(anything.accepts(&'x'));
    /// assert!(anything.accepts(&'\0'));
    /// ```
    pub fn any() -> Self {
        Self::new(|_| true)
    }

    /// Evaluate the predicate against a symbol.
    ///
    /// This is a pure function with no side effects.
    pub fn accepts(&self, symbol: &T) -> bool {
        (self.test)(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_predicate_matches() {
        let upper = Predicate::new(|c: &char| c.is_ascii_uppercase());

        assert!(upper.accepts(&'A'));
        assert!(!upper.accepts(&'a'));
    }

    #[test]
    fn equals_accepts_only_its_symbol() {
        let only_b = Predicate::equals('b');

        assert!(only_b.accepts(&'b'));
        assert!(!only_b.accepts(&'a'));
        assert!(!only_b.accepts(&'c'));
    }

    #[test]
    fn one_of_accepts_set_members() {
        let whitespace = Predicate::one_of([' ', '\t', '\n']);

        assert!(whitespace.accepts(&' '));
        assert!(whitespace.accepts(&'\n'));
        assert!(!whitespace.accepts(&'x'));
    }

    #[test]
    fn one_of_with_empty_set_rejects_everything() {
        let nothing = Predicate::one_of(Vec::<char>::new());

        assert!(!nothing.accepts(&'a'));
    }

    #[test]
    fn any_accepts_everything() {
        let anything: Predicate<u8> = Predicate::any();

        for byte in 0..=u8::MAX {
            assert!(anything.accepts(&byte));
        }
    }

    #[test]
    fn predicate_is_deterministic() {
        let digit = Predicate::new(|c: &char| c.is_ascii_digit());

        assert_eq!(digit.accepts(&'5'), digit.accepts(&'5'));
        assert_eq!(digit.accepts(&'q'), digit.accepts(&'q'));
    }

    #[test]
    fn owned_symbol_types_work() {
        let keyword = Predicate::equals(String::from("let"));

        assert!(keyword.accepts(&String::from("let")));
        assert!(!keyword.accepts(&String::from("mut")));
    }
}
