//! Error types for condition construction and the state registry.
//!
//! Evaluating a condition never fails; errors only arise while building conditions
//! from loosely typed input or while looking up named state.

use thiserror::Error;

/// Invalid input supplied while configuring a condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown comparison operator '{0}' (expected one of <, =, ==, >, lt, eq, gt)")]
    UnknownComparison(String),
}

/// Failed lookups or conflicting definitions in a `StoryState` registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no flag named '{0}' has been defined")]
    UnknownFlag(String),
    #[error("no counter named '{0}' has been defined")]
    UnknownCounter(String),
    #[error("a {kind} named '{name}' is already defined")]
    NameInUse { kind: &'static str, name: String },
}
