//! The machine: an ordered state list and the traversal that drives it.

use crate::core::{State, StateId, Symbol};
use crate::engine::outcome::{RunOutcome, UnmatchedSymbol};
use crate::engine::trace::{RunTrace, StepRecord};
use chrono::Utc;
use std::ops::{Index, IndexMut};

/// A deterministic finite-state machine over symbols of type `T`.
///
/// A machine owns its states (and transitively their transitions),
/// addressable by [`StateId`]. State 0 is always the start state.
///
/// The lifecycle is build-then-run: populate the graph through
/// [`add_state`](Machine::add_state) and the per-state builder surface,
/// then drive input sequences through it. Building takes `&mut self` and
/// running takes `&self`, so the borrow checker keeps the two phases from
/// overlapping — and because a run mutates nothing in the machine, one
/// built machine can serve many runs, concurrent ones included. Callers
/// sharing a side-effecting action across concurrent runs must serialize
/// that effect themselves.
///
/// # Example
///
/// ```rust
/// use statewalk::Machine;
///
/// // Recognize strictly alternating 'a'/'b' starting with 'a'.
/// let mut machine = Machine::new();
/// let even = machine.add_state();
/// let odd = machine.add_state();
/// machine[even].on('a', odd);
/// machine[odd].on('b', even);
///
/// assert_eq!(machine.run("abab".chars()).final_state(), even);
///
/// let fault = machine.run("aa".chars()).error().cloned().unwrap();
/// assert_eq!(fault.position, 2);
/// assert_eq!(fault.state, odd);
/// ```
pub struct Machine<T: Symbol> {
    states: Vec<State<T>>,
}

impl<T: Symbol> Machine<T> {
    /// Create a machine with no states.
    pub fn new() -> Self {
        Machine { states: Vec::new() }
    }

    /// Append a new, transition-less state and return its identifier.
    ///
    /// This is the only way to create a state. The state list is
    /// append-only: ids are stable, nothing is deleted or renumbered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    ///
    /// let mut machine: Machine<char> = Machine::new();
    /// assert_eq!(machine.add_state(), 0);
    /// assert_eq!(machine.add_state(), 1);
    /// assert_eq!(machine.len(), 2);
    /// ```
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(id));
        id
    }

    /// Borrow a state by id.
    ///
    /// Panics if `id` is out of range, like any index access.
    pub fn state(&self, id: StateId) -> &State<T> {
        &self.states[id]
    }

    /// Mutably borrow a state by id, for adding transitions.
    ///
    /// Panics if `id` is out of range, like any index access.
    pub fn state_mut(&mut self, id: StateId) -> &mut State<T> {
        &mut self.states[id]
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the machine has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Drive a symbol sequence through the machine, invoking actions.
    ///
    /// Starting at state 0 with position 1, each symbol is matched against
    /// the current state's transitions in insertion order. The first
    /// accepting transition wins: its action (if any) runs with the
    /// matched symbol, then the machine moves to its target. A symbol no
    /// transition accepts halts the run with a [`RunOutcome::Failure`]
    /// naming the symbol, its position, and the rejecting state.
    ///
    /// Empty input is trivially accepted: the result is `Success` at
    /// state 0 regardless of the graph. Exhausting the input in any state
    /// is likewise `Success`; whether that state is a sensible stopping
    /// point is the caller's question, answered post-run via
    /// [`State::is_accepting`](crate::State::is_accepting).
    ///
    /// A transition targeting a state that does not exist is a caller
    /// build-time mistake; it surfaces as an out-of-range index panic when
    /// the dangling state is next asked to match a symbol.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let digits = Arc::new(Mutex::new(String::new()));
    ///
    /// let mut machine = Machine::new();
    /// let start = machine.add_state();
    /// let sink = Arc::clone(&digits);
    /// machine[start].when_with(
    ///     |c: &char| c.is_ascii_digit(),
    ///     start,
    ///     move |c| sink.lock().unwrap().push(*c),
    /// );
    ///
    /// assert!(machine.run("123".chars()).is_success());
    /// assert_eq!(*digits.lock().unwrap(), "123");
    /// ```
    pub fn run<I>(&self, input: I) -> RunOutcome<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.traverse(input, true, None)
    }

    /// Drive a symbol sequence through the machine without side effects.
    ///
    /// Matching and the state path are identical to [`run`](Machine::run);
    /// only the attached actions are suppressed. This validates whether a
    /// stream is well-formed by the transition graph without triggering
    /// token emission or any other effect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let digits = Arc::new(Mutex::new(String::new()));
    ///
    /// let mut machine = Machine::new();
    /// let start = machine.add_state();
    /// let sink = Arc::clone(&digits);
    /// machine[start].when_with(
    ///     |c: &char| c.is_ascii_digit(),
    ///     start,
    ///     move |c| sink.lock().unwrap().push(*c),
    /// );
    ///
    /// let outcome = machine.dry_run("123".chars());
    ///
    /// assert_eq!(outcome.final_state(), start);
    /// assert!(digits.lock().unwrap().is_empty());
    /// ```
    pub fn dry_run<I>(&self, input: I) -> RunOutcome<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.traverse(input, false, None)
    }

    /// As [`run`](Machine::run), additionally recording every step taken.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::Machine;
    ///
    /// let mut machine = Machine::new();
    /// let start = machine.add_state();
    /// machine[start].on('x', start);
    ///
    /// let (outcome, trace) = machine.run_traced("xx".chars());
    ///
    /// assert!(outcome.is_success());
    /// assert_eq!(trace.path(), vec![start, start, start]);
    /// ```
    pub fn run_traced<I>(&self, input: I) -> (RunOutcome<T>, RunTrace<T>)
    where
        I: IntoIterator<Item = T>,
    {
        let mut trace = RunTrace::new();
        let outcome = self.traverse(input, true, Some(&mut trace));
        (outcome, trace)
    }

    /// Single-pass traversal shared by every run variant. No lookahead,
    /// no backtracking; the machine's structure is never mutated.
    fn traverse<I>(
        &self,
        input: I,
        call_actions: bool,
        mut trace: Option<&mut RunTrace<T>>,
    ) -> RunOutcome<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut state: StateId = 0;
        let mut position: usize = 1;

        for symbol in input {
            let Some(transition) = self.states[state].first_match(&symbol) else {
                return RunOutcome::Failure(UnmatchedSymbol {
                    symbol,
                    position,
                    state,
                });
            };

            if call_actions {
                transition.fire(&symbol);
            }
            if let Some(trace) = trace.as_mut() {
                trace.record(StepRecord {
                    from: state,
                    to: transition.target(),
                    symbol: symbol.clone(),
                    position,
                    timestamp: Utc::now(),
                });
            }

            state = transition.target();
            position += 1;
        }

        RunOutcome::Success { state }
    }
}

impl<T: Symbol> Default for Machine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> Index<StateId> for Machine<T> {
    type Output = State<T>;

    fn index(&self, id: StateId) -> &State<T> {
        self.state(id)
    }
}

impl<T: Symbol> IndexMut<StateId> for Machine<T> {
    fn index_mut(&mut self, id: StateId) -> &mut State<T> {
        self.state_mut(id)
    }
}
