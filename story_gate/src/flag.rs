//! Flag -- the literal leaf of the condition algebra.
//!
//! Bridges imperative game-state changes ("the player opened the box") and the
//! declarative condition trees built at story-definition time.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::condition::Predicate;

/// Shared handle to a mutable boolean. Clones observe each other's writes.
#[derive(Clone, Default)]
pub struct Flag(Rc<Cell<bool>>);

impl Flag {
    /// Create a new flag with the given initial value.
    pub fn new(value: bool) -> Flag {
        Flag(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Overwrite the stored value. This is the only way a flag changes.
    pub fn set(&self, value: bool) {
        trace!("flag set: {} -> {value}", self.0.get());
        self.0.set(value);
    }

    /// Shorthand for `set(true)`.
    pub fn raise(&self) {
        self.set(true);
    }

    /// Shorthand for `set(false)`.
    pub fn clear(&self) {
        self.set(false);
    }

    /// True if both handles refer to the same underlying cell.
    pub fn shares_cell_with(&self, other: &Flag) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Predicate for Flag {
    fn evaluate(&self) -> bool {
        self.get()
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag::new(value)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.get()).finish()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
