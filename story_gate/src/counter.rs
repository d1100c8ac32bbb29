//! Counter -- shared mutable integer cell.
//!
//! A single `Counter` (e.g. "times the player chose X") typically feeds several
//! `NumericCondition`s spread across a story. Cloning a `Counter` clones the handle,
//! so a write through any clone is seen by every other holder immediately.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::trace;

/// Shared handle to a mutable `i64`.
///
/// Arithmetic saturates at the bounds of `i64` rather than wrapping.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<i64>>);

impl Counter {
    /// Create a new counter holding `value`.
    pub fn new(value: i64) -> Counter {
        Counter(Rc::new(Cell::new(value)))
    }

    /// Current value.
    pub fn get(&self) -> i64 {
        self.0.get()
    }

    /// Overwrite the current value.
    pub fn set(&self, value: i64) {
        trace!("counter set: {} -> {value}", self.0.get());
        self.0.set(value);
    }

    pub fn add(&self, amount: i64) {
        self.set(self.get().saturating_add(amount));
    }

    pub fn subtract(&self, amount: i64) {
        self.set(self.get().saturating_sub(amount));
    }

    pub fn increment(&self) {
        self.add(1);
    }

    pub fn decrement(&self) {
        self.subtract(1);
    }

    /// True if both handles refer to the same underlying cell.
    pub fn shares_cell_with(&self, other: &Counter) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<i64> for Counter {
    fn from(value: i64) -> Self {
        Counter::new(value)
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Counter").field(&self.get()).finish()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
