//! RegistryBuilder for constructing an immutable Registry.

use crate::{ConstraintFactory, ConstraintKind, Registry};
use std::collections::HashMap;
use strictname_constraint::{Arity, Constraint};
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate constraint kind: {0}")]
    DuplicateKind(String),

    #[error("Keyword '{keyword}' already selects kind '{existing}', cannot also select '{kind}'")]
    DuplicateKeyword {
        keyword: String,
        existing: String,
        kind: String,
    },

    #[error("Invalid keyword '{keyword}' for kind '{kind}': keywords are non-empty lowercase ASCII words")]
    InvalidKeyword { kind: String, keyword: String },

    #[error("Constraint kind '{0}' declares no keywords")]
    NoKeywords(String),

    #[error("Constraint kind '{0}' has no constructor")]
    MissingConstructor(String),

    #[error("Constraint kind '{kind}' declares arity {declared} but its constraint takes {actual}")]
    ArityMismatch {
        kind: String,
        declared: Arity,
        actual: Arity,
    },

    #[error("Constraint kind '{kind}' declares keywords {declared:?} but its constraint answers to {actual:?}")]
    KeywordMismatch {
        kind: String,
        declared: Vec<String>,
        actual: Vec<String>,
    },
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Kinds in registration order.
    kinds: Vec<ConstraintKind>,
    /// Keyword to index into `kinds`.
    keywords: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder preloaded with the standard kinds.
    pub fn with_standard_kinds() -> Result<Self, RegistryError> {
        let mut builder = Self::new();
        for kind in Registry::standard_kinds() {
            builder.register(kind)?;
        }
        Ok(builder)
    }

    /// Register a complete kind descriptor.
    pub fn register(&mut self, kind: ConstraintKind) -> Result<&mut Self, RegistryError> {
        if self.kinds.iter().any(|k| k.name == kind.name) {
            return Err(RegistryError::DuplicateKind(kind.name.to_string()));
        }
        if kind.keywords.is_empty() {
            return Err(RegistryError::NoKeywords(kind.name.to_string()));
        }

        for keyword in kind.keywords {
            if !is_valid_keyword(keyword) {
                return Err(RegistryError::InvalidKeyword {
                    kind: kind.name.to_string(),
                    keyword: keyword.to_string(),
                });
            }
            if let Some(&existing) = self.keywords.get(*keyword) {
                return Err(RegistryError::DuplicateKeyword {
                    keyword: keyword.to_string(),
                    existing: self.kinds[existing].name.to_string(),
                    kind: kind.name.to_string(),
                });
            }
        }

        let sample = kind.instantiate(kind.name);
        let constraint = sample.constraint();
        if constraint.arity() != kind.arity {
            return Err(RegistryError::ArityMismatch {
                kind: kind.name.to_string(),
                declared: kind.arity,
                actual: constraint.arity(),
            });
        }
        if constraint.keywords() != kind.keywords {
            return Err(RegistryError::KeywordMismatch {
                kind: kind.name.to_string(),
                declared: kind.keywords.iter().map(|k| k.to_string()).collect(),
                actual: constraint.keywords().iter().map(|k| k.to_string()).collect(),
            });
        }

        let index = self.kinds.len();
        for keyword in kind.keywords {
            self.keywords.insert(keyword.to_string(), index);
        }
        self.kinds.push(kind);

        Ok(self)
    }

    /// Describe a kind field by field.
    pub fn add_kind(&mut self, name: &'static str) -> KindBuilder<'_> {
        KindBuilder {
            builder: self,
            name,
            keywords: None,
            arity: None,
            description: "",
            factory: None,
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry::new(self.kinds)
    }
}

/// Builder for a single constraint kind.
pub struct KindBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: &'static str,
    keywords: Option<&'static [&'static str]>,
    arity: Option<Arity>,
    description: &'static str,
    factory: Option<ConstraintFactory>,
}

impl<'a> KindBuilder<'a> {
    /// Set the keywords that select this kind. Defaults to the constraint's own.
    pub fn keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Set the argument arity. Defaults to the constraint's own.
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Set the constructor for new instances.
    pub fn constructor(mut self, factory: ConstraintFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Finish building this kind.
    pub fn done(self) -> Result<(), RegistryError> {
        let factory = self
            .factory
            .ok_or_else(|| RegistryError::MissingConstructor(self.name.to_string()))?;
        let constraint = factory();
        let kind = ConstraintKind::new(
            self.name,
            self.keywords.unwrap_or_else(|| constraint.keywords()),
            self.arity.unwrap_or_else(|| constraint.arity()),
            self.description,
            factory,
        );
        self.builder.register(kind)?;
        Ok(())
    }
}

fn is_valid_keyword(keyword: &str) -> bool {
    !keyword.is_empty()
        && keyword
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
