//! Parser error types.

use strictname_constraint::Arity;
use thiserror::Error;

/// Errors raised when a name lacks the holder-type prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Empty name")]
    Empty,

    #[error("Name '{name}' must start with scalar, arrayref or hashref, found '{found}'")]
    UnknownHolderType { name: String, found: String },

    #[error("Name '{name}' must continue with '_with_' or '_which_contains_' after the holder type")]
    MissingLinker { name: String },
}

impl NameError {
    pub fn unknown_holder_type(name: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnknownHolderType {
            name: name.into(),
            found: found.into(),
        }
    }

    pub fn missing_linker(name: impl Into<String>) -> Self {
        Self::MissingLinker { name: name.into() }
    }
}

/// Errors that can occur while parsing constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error("Incomplete constraint '{keyword}' at token {position}: consumed {consumed} of {required} arguments")]
    IncompleteConstraint {
        keyword: String,
        position: usize,
        consumed: usize,
        required: Arity,
    },
}

impl ParseError {
    pub fn incomplete(
        keyword: impl Into<String>,
        position: usize,
        consumed: usize,
        required: Arity,
    ) -> Self {
        Self::IncompleteConstraint {
            keyword: keyword.into(),
            position,
            consumed,
            required,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
