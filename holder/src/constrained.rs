//! The constrained value holder.

use strictname_constraint::{Violation, Violations};
use strictname_core::Value;
use strictname_parser::{split_name_with, HolderKind, Parser, ParserConfig};
use strictname_registry::{ConstraintInstance, Registry};
use tracing::{debug, trace};

use crate::error::HolderResult;

/// A value holder that validates every write against constraints parsed from
/// its name.
///
/// The constraints are fixed at construction. A write either passes all of
/// them and replaces the value, or fails on the first one that rejects it and
/// leaves the value as it was.
#[derive(Debug)]
pub struct Constrained {
    name: String,
    holder: HolderKind,
    constraints: Vec<ConstraintInstance>,
    value: Option<Value>,
}

impl Constrained {
    /// Build from a name and its already-split constraint tokens, using the
    /// standard registry.
    ///
    /// The name must still carry a valid holder-type prefix.
    pub fn construct<S: AsRef<str>>(name: impl Into<String>, tokens: &[S]) -> HolderResult<Self> {
        Self::construct_with(name, tokens, Registry::standard(), &ParserConfig::default())
    }

    /// Like [`construct`](Self::construct) with an explicit registry and configuration.
    pub fn construct_with<S: AsRef<str>>(
        name: impl Into<String>,
        tokens: &[S],
        registry: &Registry,
        config: &ParserConfig,
    ) -> HolderResult<Self> {
        let name = name.into();
        let parts = split_name_with(&name, config)?;
        let parsed = Parser::new(registry)
            .with_config(config.clone())
            .parse(tokens)?;
        Ok(Self::assemble(name, parts.holder, parsed.constraints))
    }

    /// Build from a name alone, deriving the constraint tokens from it.
    pub fn from_name(name: impl Into<String>) -> HolderResult<Self> {
        Self::with_registry(name, Registry::standard(), &ParserConfig::default())
    }

    /// Like [`from_name`](Self::from_name) with an explicit registry and configuration.
    pub fn with_registry(
        name: impl Into<String>,
        registry: &Registry,
        config: &ParserConfig,
    ) -> HolderResult<Self> {
        let name = name.into();
        let parts = split_name_with(&name, config)?;
        let parsed = Parser::new(registry)
            .with_config(config.clone())
            .parse(&parts.tokens)?;
        Ok(Self::assemble(name, parts.holder, parsed.constraints))
    }

    fn assemble(name: String, holder: HolderKind, constraints: Vec<ConstraintInstance>) -> Self {
        debug!(name = %name, holder = %holder, constraints = constraints.len(), "constrained holder built");
        Self {
            name,
            holder,
            constraints,
            value: None,
        }
    }

    /// Get the name the holder was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the holder type declared by the name.
    pub fn holder_kind(&self) -> HolderKind {
        self.holder
    }

    /// Get the constraints in evaluation order.
    pub fn constraints(&self) -> &[ConstraintInstance] {
        &self.constraints
    }

    /// Get the current value. `None` means nothing has been written yet.
    pub fn read(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Check if a value has been written.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Replace the value if `candidate` passes every constraint.
    ///
    /// On failure the error names the first rejecting constraint and the
    /// stored value is unchanged.
    pub fn write(&mut self, candidate: impl Into<Value>) -> HolderResult<()> {
        let candidate = candidate.into();
        for (index, constraint) in self.constraints.iter().enumerate() {
            if let Some(violation) = self.violation_at(index, constraint, &candidate) {
                debug!(
                    name = %self.name,
                    index,
                    constraint = %violation.constraint,
                    value = %candidate,
                    "write rejected"
                );
                return Err(violation.into());
            }
        }

        trace!(name = %self.name, value = %candidate, "write accepted");
        self.value = Some(candidate);
        Ok(())
    }

    /// Report every constraint `candidate` would fail, without writing it.
    pub fn check(&self, candidate: &Value) -> Violations {
        let mut violations = Violations::new();
        for (index, constraint) in self.constraints.iter().enumerate() {
            if let Some(violation) = self.violation_at(index, constraint, candidate) {
                violations.push(violation);
            }
        }
        violations
    }

    /// Check if `candidate` would be accepted by [`write`](Self::write).
    pub fn accepts(&self, candidate: &Value) -> bool {
        self.constraints.iter().all(|c| c.validate(candidate))
    }

    /// Remove and return the value, leaving the holder unset.
    pub fn take(&mut self) -> Option<Value> {
        self.value.take()
    }

    /// Reset the holder to unset.
    pub fn clear(&mut self) {
        self.value = None;
    }

    fn violation_at(
        &self,
        index: usize,
        constraint: &ConstraintInstance,
        candidate: &Value,
    ) -> Option<Violation> {
        if constraint.validate(candidate) {
            return None;
        }
        let message = constraint.explain(candidate).unwrap_or_else(|| {
            format!("{} does not satisfy '{}'", candidate, constraint.describe())
        });
        Some(Violation::new(
            self.name.as_str(),
            index,
            constraint.describe(),
            candidate.clone(),
            message,
        ))
    }
}
