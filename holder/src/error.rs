//! Holder error types.

use strictname_constraint::Violation;
use strictname_parser::{NameError, ParseError};
use thiserror::Error;

/// Result type for holder operations.
pub type HolderResult<T> = Result<T, HolderError>;

/// Errors that can occur while building or writing to a holder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HolderError {
    #[error("Invalid holder name: {0}")]
    NameFormat(#[from] NameError),

    #[error("Invalid constraints: {0}")]
    Parse(ParseError),

    #[error("Constraint violated: {0}")]
    Violation(#[from] Violation),
}

impl HolderError {
    /// The violation behind a rejected write, if that is what this is.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<ParseError> for HolderError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Name(name) => Self::NameFormat(name),
            other => Self::Parse(other),
        }
    }
}
