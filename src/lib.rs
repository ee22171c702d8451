//! Statewalk: a deterministic finite-state machine engine for
//! hand-written lexers and tokenizers.
//!
//! A caller defines states and per-state transition rules, then drives a
//! symbol stream through the machine. Each symbol is matched against the
//! current state's transitions in insertion order; the first accepting
//! rule wins, its optional action runs, and the machine moves on. A
//! symbol nothing accepts halts the run with a structured diagnostic.
//!
//! # Core Concepts
//!
//! - **Symbol**: one element of the input, any equality-comparable type
//! - **Predicate**: the pure guard deciding whether a transition applies
//! - **Transition**: a guarded edge to a target state, with an optional
//!   side-effecting action
//! - **Machine**: the ordered state graph and its `run` traversal
//! - **Token / TokenStream**: what actions typically emit, plus the
//!   utilities for post-processing a finished run's output
//!
//! # Example
//!
//! ```rust
//! use statewalk::{token_kind, Machine, TokenStream};
//! use std::sync::{Arc, Mutex};
//!
//! token_kind! {
//!     enum Kind {
//!         Digit,
//!         Plus,
//!     }
//! }
//!
//! let tokens = Arc::new(Mutex::new(TokenStream::new()));
//!
//! let mut machine = Machine::new();
//! let start = machine.add_state();
//!
//! let sink = Arc::clone(&tokens);
//! machine[start].when_with(
//!     |c: &char| c.is_ascii_digit(),
//!     start,
//!     move |c: &char| sink.lock().unwrap().emit_char(Kind::Digit, *c),
//! );
//! let sink = Arc::clone(&tokens);
//! machine[start].on_with('+', start, move |c: &char| {
//!     sink.lock().unwrap().emit_char(Kind::Plus, *c)
//! });
//!
//! assert!(machine.run("1+2".chars()).is_success());
//! assert_eq!(tokens.lock().unwrap().len(), 3);
//!
//! // Validation mode: same matching, no emission.
//! assert!(!machine.dry_run("1+x".chars()).is_success());
//! assert_eq!(tokens.lock().unwrap().len(), 3);
//! ```

pub mod core;
pub mod engine;
pub mod token;

// Re-export commonly used types
pub use crate::core::{Action, Predicate, State, StateId, Symbol, Transition};
pub use crate::engine::{Machine, RunOutcome, RunTrace, StepRecord, UnmatchedSymbol};
pub use crate::token::{Token, TokenKind, TokenStream};
