//! strictname Core Types
//!
//! This crate provides the foundational types shared by the strictname crates:
//! - The `Value` payload held by a constrained container
//! - `ValueKind`, the coarse runtime category of a value
//! - Common message text used in diagnostics

mod messages;
mod value;

pub use messages::*;
pub use value::*;
