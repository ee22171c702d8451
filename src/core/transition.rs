//! State transitions: guarded edges with optional side effects.

use super::predicate::Predicate;
use super::state::StateId;
use super::symbol::Symbol;

/// Side-effecting callback invoked when a transition is taken.
///
/// The action receives the symbol that satisfied the predicate. It may
/// mutate external state (typically appending to a token collection) but
/// never the machine itself.
pub type Action<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A guarded edge from one state to another.
///
/// A transition pairs a [`Predicate`] over one input symbol with a target
/// state id and an optional action. It is immutable once constructed.
///
/// The target is not validated at construction time; it must name a state
/// that exists in the owning machine by the time a run consults it.
///
/// # Example
///
/// ```rust
/// use statewalk::{Predicate, Transition};
///
/// let transition = Transition::new(1, Predicate::equals('a'));
///
/// assert_eq!(transition.target(), 1);
/// assert!(transition.accepts(&'a'));
/// assert!(!transition.has_action());
/// ```
pub struct Transition<T: Symbol> {
    target: StateId,
    predicate: Predicate<T>,
    action: Option<Action<T>>,
}

impl<T: Symbol> Transition<T> {
    /// Create a transition with no action.
    pub fn new(target: StateId, predicate: Predicate<T>) -> Self {
        Transition {
            target,
            predicate,
            action: None,
        }
    }

    /// Create a transition that runs an action when taken.
    ///
    /// The action is invoked exactly once per matched symbol,
    /// synchronously, after the predicate accepts and before the state
    /// change takes effect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{Predicate, Transition};
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let transition = Transition::with_action(
    ///     0,
    ///     Predicate::new(|c: &char| c.is_ascii_digit()),
    ///     move |c: &char| sink.lock().unwrap().push(*c),
    /// );
    ///
    /// assert!(transition.has_action());
    /// ```
    pub fn with_action<A>(target: StateId, predicate: Predicate<T>, action: A) -> Self
    where
        A: Fn(&T) + Send + Sync + 'static,
    {
        Transition {
            target,
            predicate,
            action: Some(Box::new(action)),
        }
    }

    /// The state this transition moves to when taken.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// Whether this transition's predicate accepts a symbol (pure).
    pub fn accepts(&self, symbol: &T) -> bool {
        self.predicate.accepts(symbol)
    }

    /// Whether an action is attached.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Invoke the attached action, if any, with the matched symbol.
    pub(crate) fn fire(&self, symbol: &T) {
        if let Some(action) = &self.action {
            action(symbol);
        }
    }
}
