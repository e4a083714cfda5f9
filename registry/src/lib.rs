//! strictname Registry
//!
//! Keyword lookup for constraint kinds. The registry is immutable after
//! construction via RegistryBuilder; the standard registry is built once per
//! process and shared read-only.

mod builder;
mod registry;
mod types;

pub use builder::{KindBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::*;
