#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Story Gate **
//!
//! Condition algebra used to gate dialogue options, scene transitions and achievements
//! on the current state of a branching story.
//!
//! Leaves (`Flag`, `NumericCondition`) hold shared, externally mutated state; combinators
//! (`Conjunction`, `Disjunction`, `ExclusiveDisjunction`) and `Condition::Not` are fixed at
//! construction and simply re-evaluate their children on every query.

pub const STORY_GATE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod comparison;
pub mod condition;
pub mod counter;
pub mod error;
pub mod flag;
pub mod state;

// Re-exports for convenience
pub use comparison::Comparison;
pub use condition::{
    Condition, Predicate, all, any,
    combinator::{Conjunction, Disjunction, ExclusiveDisjunction},
    numeric::NumericCondition,
};
pub use counter::Counter;
pub use error::{ConfigurationError, StateError};
pub use flag::Flag;
pub use state::{StateDef, StoryState};
