//! The Registry - immutable keyword lookup.

use crate::ConstraintKind;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The Registry maps keywords to constraint kinds.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Kinds in registration order.
    kinds: Vec<ConstraintKind>,
    /// Kind lookup by lowercase keyword.
    keywords: HashMap<String, usize>,
    /// Kind lookup by name.
    names: HashMap<&'static str, usize>,
}

impl Registry {
    /// Index a list of kinds already validated by RegistryBuilder.
    pub(crate) fn new(kinds: Vec<ConstraintKind>) -> Self {
        let mut keywords = HashMap::new();
        let mut names = HashMap::new();
        for (index, kind) in kinds.iter().enumerate() {
            names.insert(kind.name, index);
            for keyword in kind.keywords {
                keywords.insert(keyword.to_ascii_lowercase(), index);
            }
        }
        Self {
            kinds,
            keywords,
            names,
        }
    }

    /// The kinds every process knows about.
    pub fn standard_kinds() -> [ConstraintKind; 2] {
        [ConstraintKind::between(), ConstraintKind::contains()]
    }

    /// The process-wide standard registry, built on first use.
    pub fn standard() -> &'static Registry {
        static STANDARD: OnceLock<Registry> = OnceLock::new();
        STANDARD.get_or_init(|| Registry::new(Self::standard_kinds().to_vec()))
    }

    // ==================== Lookups ====================

    /// Find the kind selected by `keyword` (case-insensitive, exact).
    pub fn lookup(&self, keyword: &str) -> Option<&ConstraintKind> {
        let index = match self.keywords.get(keyword) {
            Some(index) => Some(index),
            None => self.keywords.get(&keyword.to_ascii_lowercase()),
        };
        index.map(|&i| &self.kinds[i])
    }

    /// Get a kind by its name.
    pub fn get(&self, name: &str) -> Option<&ConstraintKind> {
        self.names.get(name).map(|&i| &self.kinds[i])
    }

    /// Whether `token` selects any kind.
    pub fn is_keyword(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Get all kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &ConstraintKind> {
        self.kinds.iter()
    }

    /// Get every registered keyword.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(|k| k.as_str())
    }

    /// Get the number of kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
