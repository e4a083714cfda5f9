//! Parser configuration.

use crate::lexer::DEFAULT_SEPARATOR;

/// Configuration for name splitting and constraint parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Character separating the words of an identifier.
    pub separator: char,
    /// Treat an incomplete constraint as an error instead of dropping it.
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            strict: false,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}
