//! strictname Holder
//!
//! A value holder whose constraints come from its own name.
//!
//! Responsibilities:
//! - Check the holder-type prefix of the name at construction
//! - Parse the remaining tokens into constraints, once, eagerly
//! - Validate every write against all constraints, left to right
//! - Leave the stored value untouched when a write is rejected

mod constrained;
mod error;

pub use constrained::Constrained;
pub use error::{HolderError, HolderResult};
pub use strictname_constraint::{Violation, Violations};
pub use strictname_core::Value;
pub use strictname_parser::{HolderKind, ParserConfig};
