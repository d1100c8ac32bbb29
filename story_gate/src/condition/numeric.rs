//! Numeric comparison leaf.
//!
//! Compares the live value of a shared `Counter` against a fixed target. The condition
//! also forwards the counter's mutators, so game logic can keep a single handle around
//! both for updating the tracked quantity and for gating on it.

use std::fmt;

use crate::comparison::Comparison;
use crate::condition::Predicate;
use crate::counter::Counter;

/// `counter <comparison> target`, evaluated against the counter's value at query time.
#[derive(Debug, Clone)]
pub struct NumericCondition {
    counter: Counter,
    comparison: Comparison,
    target: i64,
}

impl NumericCondition {
    /// Compare an existing (possibly shared) counter against `target`.
    pub fn new(counter: Counter, comparison: Comparison, target: i64) -> NumericCondition {
        NumericCondition {
            counter,
            comparison,
            target,
        }
    }

    /// Compare a fresh private counter, starting at `initial`, against `target`.
    pub fn with_value(initial: i64, comparison: Comparison, target: i64) -> NumericCondition {
        NumericCondition::new(Counter::new(initial), comparison, target)
    }

    /// Equality check against `target`; the operator used when a script omits one.
    pub fn equal_to(counter: Counter, target: i64) -> NumericCondition {
        NumericCondition::new(counter, Comparison::default(), target)
    }

    /// Build from a sign-encoded operator (negative = less than, zero = equal, positive = greater than).
    pub fn from_sign(counter: Counter, sign: i64, target: i64) -> NumericCondition {
        NumericCondition::new(counter, Comparison::from_sign(sign), target)
    }

    /// Shared handle to the underlying counter.
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Current value of the underlying counter.
    pub fn value(&self) -> i64 {
        self.counter.get()
    }

    pub fn set_counter(&self, value: i64) {
        self.counter.set(value);
    }

    pub fn add(&self, amount: i64) {
        self.counter.add(amount);
    }

    pub fn subtract(&self, amount: i64) {
        self.counter.subtract(amount);
    }

    pub fn increment(&self) {
        self.counter.increment();
    }

    pub fn decrement(&self) {
        self.counter.decrement();
    }
}

impl Predicate for NumericCondition {
    fn evaluate(&self) -> bool {
        self.comparison.holds(self.counter.get(), self.target)
    }
}

impl fmt::Display for NumericCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.counter.get(), self.comparison, self.target)
    }
}
