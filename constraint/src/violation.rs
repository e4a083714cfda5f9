//! Constraint violation types.

use std::fmt;

use strictname_core::Value;

/// A constraint violation: one attached constraint rejected a candidate value.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Name of the container the write was aimed at.
    pub holder: String,
    /// Position of the rejecting constraint in evaluation order.
    pub index: usize,
    /// Description of the rejecting constraint.
    pub constraint: String,
    /// The rejected candidate.
    pub value: Value,
    /// Human-readable message describing the violation.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        holder: impl Into<String>,
        index: usize,
        constraint: impl Into<String>,
        value: Value,
        message: impl Into<String>,
    ) -> Self {
        Self {
            holder: holder.into(),
            index,
            constraint: constraint.into(),
            value,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: constraint #{} ({}) rejected {}: {}",
            self.holder, self.index, self.constraint, self.value, self.message
        )
    }
}

impl std::error::Error for Violation {}

/// Collection of violations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// The violation raised by the earliest constraint, if any.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Indices of the constraints that failed, in evaluation order.
    pub fn indices(&self) -> Vec<usize> {
        self.violations.iter().map(|v| v.index).collect()
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
