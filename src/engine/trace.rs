//! Per-run step tracing.
//!
//! A trace records every transition a run takes, in order, with enough
//! context to replay or debug the traversal. Traces are an opt-in
//! diagnostic: the plain run path records nothing.

use crate::core::{StateId, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step taken during a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord<T: Symbol> {
    /// The state the machine was in when the symbol arrived.
    pub from: StateId,
    /// The state the matched transition moved to.
    pub to: StateId,
    /// The symbol that was consumed.
    pub symbol: T,
    /// 1-based position of the symbol in the input.
    pub position: usize,
    /// When the step was taken.
    pub timestamp: DateTime<Utc>,
}

/// Ordered record of the steps one run took.
///
/// Produced by [`Machine::run_traced`](crate::Machine::run_traced). A trace
/// only covers transitions that were actually taken: a run that fails at
/// position `n` has `n - 1` steps.
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
/// let (outcome, trace) = machine.run_traced("abab".chars());
///
/// assert!(outcome.is_success());
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace.path(), vec![even, odd, even, odd, even]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunTrace<T: Symbol> {
    steps: Vec<StepRecord<T>>,
}

impl<T: Symbol> Default for RunTrace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Symbol> RunTrace<T> {
    /// Create an empty trace.
    pub fn new() -> Self {
        RunTrace { steps: Vec::new() }
    }

    /// Append a step record.
    pub fn record(&mut self, step: StepRecord<T>) {
        self.steps.push(step);
    }

    /// All recorded steps, in order.
    pub fn steps(&self) -> &[StepRecord<T>] {
        &self.steps
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was taken.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The sequence of states visited: the starting state, then the target
    /// of each step. Empty for an empty trace.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        for step in &self.steps {
            path.push(step.to);
        }
        path
    }

    /// Elapsed time from the first step to the last.
    ///
    /// `None` when the trace is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: StateId, to: StateId, symbol: char, position: usize) -> StepRecord<char> {
        StepRecord {
            from,
            to,
            symbol,
            position,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace: RunTrace<char> = RunTrace::new();

        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
        assert!(trace.path().is_empty());
        assert!(trace.duration().is_none());
    }

    #[test]
    fn record_preserves_order() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 1, 'a', 1));
        trace.record(step(1, 0, 'b', 2));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.steps()[0].symbol, 'a');
        assert_eq!(trace.steps()[1].symbol, 'b');
    }

    #[test]
    fn path_starts_at_the_first_from_state() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 2, 'x', 1));
        trace.record(step(2, 2, 'y', 2));
        trace.record(step(2, 1, 'z', 3));

        assert_eq!(trace.path(), vec![0, 2, 2, 1]);
    }

    #[test]
    fn single_step_trace_has_zero_duration() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 1, 'a', 1));

        assert_eq!(trace.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let base = Utc::now();
        let mut trace = RunTrace::new();
        trace.record(StepRecord {
            from: 0,
            to: 1,
            symbol: 'a',
            position: 1,
            timestamp: base,
        });
        trace.record(StepRecord {
            from: 1,
            to: 0,
            symbol: 'b',
            position: 2,
            timestamp: base + chrono::Duration::milliseconds(25),
        });

        assert_eq!(trace.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn trace_round_trips_through_json() {
        let mut trace = RunTrace::new();
        trace.record(step(0, 1, 'a', 1));

        let json = serde_json::to_string(&trace).unwrap();
        let back: RunTrace<char> = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, back);
    }
}
