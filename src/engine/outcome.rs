//! Run outcomes and the engine's failure diagnostic.

use crate::core::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic for a symbol no transition out of the current state accepts.
///
/// This is the only error the engine itself defines. It is always
/// attributable to a transition graph not covering some input, and it
/// carries everything needed to locate the gap: the rejected symbol, its
/// 1-based position in the input, and the state that rejected it.
///
/// # Example
///
/// ```rust
/// use statewalk::{Machine, RunOutcome};
///
/// let mut machine: Machine<char> = Machine::new();
/// machine.add_state();
///
/// match machine.run("a".chars()) {
///     RunOutcome::Failure(fault) => {
///         assert_eq!(fault.symbol, 'a');
///         assert_eq!(fault.position, 1);
///         assert_eq!(fault.state, 0);
///         assert_eq!(
///             fault.to_string(),
///             "unexpected symbol 'a' at state 0, position 1"
///         );
///     }
///     RunOutcome::Success { .. } => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("unexpected symbol {symbol:?} at state {state}, position {position}")]
pub struct UnmatchedSymbol<T: Symbol> {
    /// The symbol that no transition accepted.
    pub symbol: T,
    /// 1-based position of the symbol, counting from the first consumed.
    pub position: usize,
    /// The state in which matching failed (also where the run halted).
    pub state: StateId,
}

/// The outcome of one run: the final state reached, or a structured
/// failure.
///
/// A run either fully consumes its input or stops at the first rejected
/// symbol; there is no partial success and no retry. Failure is a normal,
/// inspectable return value, not a panic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome<T: Symbol> {
    /// The input was exhausted without any symbol being rejected.
    Success {
        /// The state the machine finished on.
        state: StateId,
    },
    /// A symbol was rejected and the run halted.
    Failure(UnmatchedSymbol<T>),
}

impl<T: Symbol> RunOutcome<T> {
    /// Whether the input was fully consumed.
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }

    /// The state the run halted in.
    ///
    /// For a success this is the state after the last transition; for a
    /// failure it is the state that rejected the symbol.
    pub fn final_state(&self) -> StateId {
        match self {
            RunOutcome::Success { state } => *state,
            RunOutcome::Failure(fault) => fault.state,
        }
    }

    /// The failure diagnostic, if the run failed.
    pub fn error(&self) -> Option<&UnmatchedSymbol<T>> {
        match self {
            RunOutcome::Success { .. } => None,
            RunOutcome::Failure(fault) => Some(fault),
        }
    }

    /// Convert into a `Result`, for composing with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewalk::{Machine, UnmatchedSymbol};
    ///
    /// fn ends_on(input: &str) -> Result<usize, UnmatchedSymbol<char>> {
    ///     let mut machine = Machine::new();
    ///     let start = machine.add_state();
    ///     machine[start].on('x', start);
    ///     machine.run(input.chars()).into_result()
    /// }
    ///
    /// assert_eq!(ends_on("xxx"), Ok(0));
    /// assert!(ends_on("xy").is_err());
    /// ```
    pub fn into_result(self) -> Result<StateId, UnmatchedSymbol<T>> {
        match self {
            RunOutcome::Success { state } => Ok(state),
            RunOutcome::Failure(fault) => Err(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reports_its_state() {
        let outcome: RunOutcome<char> = RunOutcome::Success { state: 4 };

        assert!(outcome.is_success());
        assert_eq!(outcome.final_state(), 4);
        assert!(outcome.error().is_none());
        assert_eq!(outcome.into_result(), Ok(4));
    }

    #[test]
    fn failure_exposes_the_diagnostic() {
        let fault = UnmatchedSymbol {
            symbol: 'q',
            position: 3,
            state: 1,
        };
        let outcome = RunOutcome::Failure(fault.clone());

        assert!(!outcome.is_success());
        assert_eq!(outcome.final_state(), 1);
        assert_eq!(outcome.error(), Some(&fault));
        assert_eq!(outcome.into_result(), Err(fault));
    }

    #[test]
    fn diagnostic_message_names_symbol_state_and_position() {
        let fault = UnmatchedSymbol {
            symbol: 'a',
            position: 1,
            state: 0,
        };

        assert_eq!(
            fault.to_string(),
            "unexpected symbol 'a' at state 0, position 1"
        );
    }

    #[test]
    fn diagnostic_is_a_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<UnmatchedSymbol<char>>();
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let outcome = RunOutcome::Failure(UnmatchedSymbol {
            symbol: 'z',
            position: 9,
            state: 2,
        });

        let json = serde_json::to_string(&outcome).unwrap();
        let back: RunOutcome<char> = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, back);
    }
}
