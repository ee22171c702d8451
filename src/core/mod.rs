//! Core data model for machine graphs.
//!
//! This module contains the pure building blocks of a machine:
//! - Input symbols via the [`Symbol`] trait
//! - [`Predicate`] guards deciding which transition applies
//! - [`Transition`] edges pairing a predicate, a target, and an optional
//!   action
//! - [`State`] nodes holding ordered transition lists
//!
//! Everything here is inert data; driving a symbol stream through a graph
//! lives in [`crate::engine`].

mod predicate;
mod state;
mod symbol;
mod transition;

pub use predicate::Predicate;
pub use state::{State, StateId};
pub use symbol::Symbol;
pub use transition::{Action, Transition};
