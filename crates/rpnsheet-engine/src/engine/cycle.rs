//! Circular dependency reporting.
//!
//! The evaluator detects a cycle when a formula references a cell that is
//! still being evaluated further down the work stack. Rather than the full
//! path, the report names the two adjacent cells whose reference closes the
//! cycle.

use std::fmt;

use super::CellName;

/// Two cells on the boundary of a dependency cycle.
///
/// `first` is the cell found already in progress; `second` is the cell whose
/// formula referenced it, i.e. its predecessor on the cycle. For a cycle
/// longer than two cells this is not the successor of `first`: evaluating
/// A1 on `A1 -> B1 -> C1 -> A1` reports (A1, C1), not (A1, B1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircularDependency {
    pub first: CellName,
    pub second: CellName,
}

impl CircularDependency {
    pub fn new(first: CellName, second: CellName) -> Self {
        CircularDependency { first, second }
    }

    /// Whether `a` and `b` are the reported pair, in either order.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.first.as_str() == a && self.second.as_str() == b)
            || (self.first.as_str() == b && self.second.as_str() == a)
    }
}

impl fmt::Display for CircularDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circular dependency between {} and {} detected",
            self.first, self.second
        )
    }
}

impl std::error::Error for CircularDependency {}
