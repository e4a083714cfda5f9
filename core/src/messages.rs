//! Common message text used across strictname components.
//!
//! These constants keep wording consistent between constraint descriptions and
//! container diagnostics.

/// Message: value is not numeric, so a range cannot apply.
pub const MSG_NOT_NUMERIC: &str = "value is not numeric";

/// Message: a range constraint was evaluated without both bounds.
pub const MSG_MISSING_BOUNDS: &str = "range constraint has fewer than two bounds";

/// Message: value lies outside the permitted range.
pub const MSG_OUT_OF_RANGE: &str = "value is out of range";

/// Message: value does not have any of the permitted types.
pub const MSG_TYPE_NOT_ALLOWED: &str = "value type is not permitted";
