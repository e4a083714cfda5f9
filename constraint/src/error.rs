//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur while interpreting constraint argument tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Unknown type tag: {token}")]
    UnknownTypeTag { token: String },

    #[error("Not a numeric bound: {token}")]
    NotNumeric { token: String },
}

impl ConstraintError {
    pub fn unknown_type_tag(token: impl Into<String>) -> Self {
        Self::UnknownTypeTag {
            token: token.into(),
        }
    }

    pub fn not_numeric(token: impl Into<String>) -> Self {
        Self::NotNumeric {
            token: token.into(),
        }
    }
}
