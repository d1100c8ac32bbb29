//! Comparison operators used by `NumericCondition`.
//!
//! Story scripts encode a comparison compactly as the sign of an integer (negative = less
//! than, zero = equal, positive = greater than). `Comparison::from_sign` keeps that encoding
//! available while the rest of the crate works with the explicit enum.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// How a counter's live value is compared against a fixed target.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    LessThan,
    #[default]
    Equal,
    GreaterThan,
}

impl Comparison {
    /// Select an operator from the sign of `sign`.
    ///
    /// Only the sign matters: `-5` and `-1` both give `LessThan`.
    pub fn from_sign(sign: i64) -> Comparison {
        Comparison::from(sign.cmp(&0))
    }

    /// The ordering `lhs` must have relative to `rhs` for this comparison to hold.
    pub fn ordering(self) -> Ordering {
        match self {
            Comparison::LessThan => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::GreaterThan => Ordering::Greater,
        }
    }

    /// Returns true if `lhs <op> rhs`.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        lhs.cmp(&rhs) == self.ordering()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::LessThan => "<",
            Comparison::Equal => "==",
            Comparison::GreaterThan => ">",
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::LessThan,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::GreaterThan,
        }
    }
}

impl FromStr for Comparison {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<" | "lt" => Ok(Comparison::LessThan),
            "=" | "==" | "eq" => Ok(Comparison::Equal),
            ">" | "gt" => Ok(Comparison::GreaterThan),
            _ => Err(ConfigurationError::UnknownComparison(s.to_string())),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
