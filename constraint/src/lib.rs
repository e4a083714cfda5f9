//! strictname Constraint
//!
//! Constraint kinds that guard writes to a constrained container.
//!
//! Responsibilities:
//! - Define the `Constraint` interface every kind implements
//! - Consume argument tokens while a constraint is hungry
//! - Validate candidate values
//! - Produce meaningful violation messages
//!
//! # Module Structure
//!
//! - `constraint` - The `Constraint` trait, `Arity` and `Argument`
//! - `between` - Inclusive numeric range
//! - `contains` - Type membership over a fixed vocabulary of type tags
//! - `violation` - Violation reports produced when a value is rejected

mod between;
mod constraint;
mod contains;
mod error;
mod violation;

pub use between::{is_numeric_token, parse_bound, parse_bound_argument, Between};
pub use constraint::{Argument, Arity, Constraint};
pub use contains::{Contains, TypeTag};
pub use error::{ConstraintError, ConstraintResult};
pub use violation::{Violation, Violations};
