//! Condition module --
//!
//! A `Condition` is a fixed tree of leaves (flags, numeric comparisons) and combinators.
//! The tree shape never changes after construction, but leaves share their state with the
//! game-state layer, so re-evaluating the same tree tracks the story as it progresses.

pub mod combinator;
pub mod numeric;

pub use combinator::*;
pub use numeric::*;

use std::fmt;

use crate::flag::Flag;

/// Anything that can be asked whether it currently holds.
///
/// `evaluate` must be pure: it reads leaf state but never writes it, so calling it twice
/// with no intervening mutation gives the same answer.
pub trait Predicate {
    fn evaluate(&self) -> bool;

    /// Build a new `Condition` holding the complement of this one. `self` is left untouched
    /// and the negation shares all of its leaf state.
    fn negate(&self) -> Condition
    where
        Self: Clone + Into<Condition>,
    {
        Condition::Not(Box::new(self.clone().into()))
    }
}

/// True if every condition holds. Stops at the first false; an empty slice is vacuously true.
pub fn all<P: Predicate>(conditions: &[P]) -> bool {
    conditions.iter().all(P::evaluate)
}

/// True if at least one condition holds. Stops at the first true; an empty slice is false.
pub fn any<P: Predicate>(conditions: &[P]) -> bool {
    conditions.iter().any(P::evaluate)
}

/// Every kind of node a gating tree can contain.
///
/// Cloning a `Condition` copies the tree structure only. Leaves hand out shared handles,
/// so a clone keeps observing the same flags and counters as the original.
#[derive(Debug, Clone)]
pub enum Condition {
    Literal(Flag),
    Not(Box<Condition>),
    Numeric(NumericCondition),
    And(Conjunction),
    Or(Disjunction),
    Xor(ExclusiveDisjunction),
}

impl Condition {
    /// Leaves hold game state directly; everything else is derived from children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Condition::Literal(_) | Condition::Numeric(_))
    }

    pub fn is_combinator(&self) -> bool {
        matches!(self, Condition::And(_) | Condition::Or(_) | Condition::Xor(_))
    }
}

impl Predicate for Condition {
    fn evaluate(&self) -> bool {
        match self {
            Condition::Literal(flag) => flag.evaluate(),
            Condition::Not(inner) => !inner.evaluate(),
            Condition::Numeric(numeric) => numeric.evaluate(),
            Condition::And(and) => and.evaluate(),
            Condition::Or(or) => or.evaluate(),
            Condition::Xor(xor) => xor.evaluate(),
        }
    }
}

impl From<Flag> for Condition {
    fn from(flag: Flag) -> Self {
        Condition::Literal(flag)
    }
}

impl From<NumericCondition> for Condition {
    fn from(numeric: NumericCondition) -> Self {
        Condition::Numeric(numeric)
    }
}

impl From<Conjunction> for Condition {
    fn from(and: Conjunction) -> Self {
        Condition::And(and)
    }
}

impl From<Disjunction> for Condition {
    fn from(or: Disjunction) -> Self {
        Condition::Or(or)
    }
}

impl From<ExclusiveDisjunction> for Condition {
    fn from(xor: ExclusiveDisjunction) -> Self {
        Condition::Xor(xor)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Literal(flag) => write!(f, "{flag}"),
            Condition::Not(inner) => write!(f, "!{inner}"),
            Condition::Numeric(numeric) => write!(f, "{numeric}"),
            Condition::And(and) => write!(f, "{and}"),
            Condition::Or(or) => write!(f, "{or}"),
            Condition::Xor(xor) => write!(f, "{xor}"),
        }
    }
}
