//! Integration test framework for strictname.
//!
//! A [`Scenario`] builds one holder from its name, then replays a series of
//! writes against it, checking each outcome with an [`Assertion`].

mod assertion;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::Scenario;

use std::sync::Once;

/// Install a test subscriber once per process. `RUST_LOG` controls the level.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub mod prelude {
    pub use crate::{init_tracing, Assertion, Scenario, ScenarioError, ScenarioResult};
    pub use strictname_constraint::{Argument, Arity, Between, Constraint, Contains, TypeTag};
    pub use strictname_core::{map, Value};
    pub use strictname_holder::{Constrained, HolderError, Violation, Violations};
    pub use strictname_parser::{
        parse_constraints, split_name, HolderKind, NameError, ParseError, Parser, ParserConfig,
    };
    pub use strictname_registry::{ConstraintKind, Registry, RegistryBuilder, RegistryError};
}
