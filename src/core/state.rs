//! Machine states and their fluent transition-building surface.

use super::predicate::Predicate;
use super::symbol::Symbol;
use super::transition::Transition;

/// Identifier of a state: its position in the owning machine's state list.
///
/// State 0 is always the start state.
pub type StateId = usize;

/// A node in a machine's graph.
///
/// A state holds an ordered list of transitions. Order is significant:
/// transitions are evaluated in insertion order and the first whose
/// predicate accepts the symbol wins, which makes later overlapping rules
/// unreachable. The engine does not detect or correct dead rules.
///
/// The `accepting` flag is caller metadata only. Runs never read it; it
/// exists so a caller can classify the final state after a run completes.
///
/// States are created through [`Machine::add_state`](crate::Machine::add_state)
/// and owned exclusively by their machine. Every add-operation appends
/// (nothing removes a transition once added) and returns `&mut Self` so
/// rules chain fluently.
///
/// # Example
///
/// ```rust
/// use statewalk::Machine;
///
/// let mut machine = Machine::new();
/// let start = machine.add_state();
/// let body = machine.add_state();
///
/// machine[start].when(|c: &char| c.is_ascii_alphabetic(), body);
/// machine[body]
///     .when(|c: &char| c.is_ascii_alphanumeric(), body)
///     .set_accepting(true);
///
/// assert_eq!(machine[body].transitions().len(), 1);
/// assert!(machine[body].is_accepting());
/// ```
pub struct State<T: Symbol> {
    id: StateId,
    accepting: bool,
    transitions: Vec<Transition<T>>,
}

impl<T: Symbol> State<T> {
    pub(crate) fn new(id: StateId) -> Self {
        State {
            id,
            accepting: false,
            transitions: Vec::new(),
        }
    }

    /// This state's position in the owning machine.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Whether the caller marked this state as a valid stopping point.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Mark or unmark this state as a valid stopping point.
    ///
    /// Pure caller metadata: runs succeed or fail regardless of this flag.
    pub fn set_accepting(&mut self, accepting: bool) -> &mut Self {
        self.accepting = accepting;
        self
    }

    /// The transitions out of this state, in insertion order.
    pub fn transitions(&self) -> &[Transition<T>] {
        &self.transitions
    }

    /// Append an explicit transition.
    pub fn add_transition(&mut self, transition: Transition<T>) -> &mut Self {
        self.transitions.push(transition);
        self
    }

    /// Append a transition guarded by an explicit predicate function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    ///
    /// let mut machine = Machine::new();
    /// let start = machine.add_state();
    /// machine[start].when(|c: &char| c.is_ascii_digit(), start);
    ///
    /// assert!(machine.run("2048".chars()).is_success());
    /// ```
    pub fn when<P>(&mut self, predicate: P, target: StateId) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.add_transition(Transition::new(target, Predicate::new(predicate)))
    }

    /// Append a predicate-guarded transition with an action.
    pub fn when_with<P, A>(&mut self, predicate: P, target: StateId, action: A) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        A: Fn(&T) + Send + Sync + 'static,
    {
        self.add_transition(Transition::with_action(
            target,
            Predicate::new(predicate),
            action,
        ))
    }

    /// Append a transition taken when the symbol equals `symbol`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    ///
    /// let mut machine = Machine::new();
    /// let even = machine.add_state();
    /// let odd = machine.add_state();
    /// machine[even].on('a', odd);
    /// machine[odd].on('b', even);
    ///
    /// assert_eq!(machine.run("abab".chars()).final_state(), even);
    /// ```
    pub fn on(&mut self, symbol: T, target: StateId) -> &mut Self {
        self.add_transition(Transition::new(target, Predicate::equals(symbol)))
    }

    /// Append an equality-guarded transition with an action.
    pub fn on_with<A>(&mut self, symbol: T, target: StateId, action: A) -> &mut Self
    where
        A: Fn(&T) + Send + Sync + 'static,
    {
        self.add_transition(Transition::with_action(
            target,
            Predicate::equals(symbol),
            action,
        ))
    }

    /// Append a transition taken when the symbol is in `symbols`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    ///
    /// let mut machine = Machine::new();
    /// let start = machine.add_state();
    /// machine[start].on_one_of(['+', '-', '*', '/'], start);
    ///
    /// assert!(machine.run("+-*".chars()).is_success());
    /// assert!(!machine.run("+=".chars()).is_success());
    /// ```
    pub fn on_one_of<I>(&mut self, symbols: I, target: StateId) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.add_transition(Transition::new(target, Predicate::one_of(symbols)))
    }

    /// Append a set-membership transition with an action.
    pub fn on_one_of_with<I, A>(&mut self, symbols: I, target: StateId, action: A) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        A: Fn(&T) + Send + Sync + 'static,
    {
        self.add_transition(Transition::with_action(
            target,
            Predicate::one_of(symbols),
            action,
        ))
    }

    /// First transition whose predicate accepts `symbol`, in insertion
    /// order. This is the machine's entire disambiguation rule.
    pub fn first_match(&self, symbol: &T) -> Option<&Transition<T>> {
        self.transitions.iter().find(|t| t.accepts(symbol))
    }
}
