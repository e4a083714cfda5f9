//! Constraint kind descriptors and their instances.

use std::fmt;

use strictname_constraint::{Argument, Arity, Between, Constraint, Contains};
use strictname_core::Value;

/// Constructor producing a fresh, argument-less constraint.
pub type ConstraintFactory = fn() -> Box<dyn Constraint>;

fn new_between() -> Box<dyn Constraint> {
    Box::new(Between::new())
}

fn new_contains() -> Box<dyn Constraint> {
    Box::new(Contains::new())
}

/// Constraint kind descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintKind {
    /// Unique kind name.
    pub name: &'static str,
    /// Keywords that select this kind (lowercase).
    pub keywords: &'static [&'static str],
    /// Arguments required before an instance is satisfied.
    pub arity: Arity,
    /// Human-readable description.
    pub description: &'static str,
    factory: ConstraintFactory,
}

impl ConstraintKind {
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        arity: Arity,
        description: &'static str,
        factory: ConstraintFactory,
    ) -> Self {
        Self {
            name,
            keywords,
            arity,
            description,
            factory,
        }
    }

    /// The inclusive numeric range kind.
    pub fn between() -> Self {
        Self::new(
            Between::NAME,
            Between::KEYWORDS,
            Arity::Exact(2),
            Between::DESCRIPTION,
            new_between,
        )
    }

    /// The type membership kind.
    pub fn contains() -> Self {
        Self::new(
            Contains::NAME,
            Contains::KEYWORDS,
            Arity::Variadic,
            Contains::DESCRIPTION,
            new_contains,
        )
    }

    /// Whether `keyword` selects this kind (case-insensitive, exact).
    pub fn is_selected_by(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }

    /// Start a new instance of this kind, selected by `keyword`.
    pub fn instantiate(&self, keyword: impl Into<String>) -> ConstraintInstance {
        ConstraintInstance {
            kind: *self,
            keyword: keyword.into(),
            constraint: (self.factory)(),
        }
    }
}

/// One instantiated constraint with the arguments it has consumed.
#[derive(Debug)]
pub struct ConstraintInstance {
    kind: ConstraintKind,
    keyword: String,
    constraint: Box<dyn Constraint>,
}

impl ConstraintInstance {
    pub fn kind(&self) -> &ConstraintKind {
        &self.kind
    }

    /// Name of the kind, e.g. `between`.
    pub fn name(&self) -> &'static str {
        self.kind.name
    }

    /// The keyword token that selected this instance.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Arity as the constraint itself reports it.
    pub fn arity(&self) -> Arity {
        self.constraint.arity()
    }

    pub fn args(&self) -> &[Argument] {
        self.constraint.args()
    }

    pub fn consume(&mut self, token: &str) -> bool {
        self.constraint.consume(token)
    }

    pub fn hungry(&self) -> bool {
        self.constraint.hungry()
    }

    pub fn is_satisfied(&self) -> bool {
        self.constraint.is_satisfied()
    }

    pub fn validate(&self, value: &Value) -> bool {
        self.constraint.validate(value)
    }

    pub fn describe(&self) -> String {
        self.constraint.describe()
    }

    /// Reason `value` is rejected, or `None` if it passes.
    pub fn explain(&self, value: &Value) -> Option<String> {
        self.constraint.explain(value)
    }

    /// Access the underlying constraint.
    pub fn constraint(&self) -> &dyn Constraint {
        self.constraint.as_ref()
    }
}

impl fmt::Display for ConstraintInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
