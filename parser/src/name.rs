//! Holder-type prefix of a constrained name.
//!
//! A name reads `TYPE_with_...` or `TYPE_which_contains_...`, where TYPE is one
//! of `scalar`, `arrayref` or `hashref`. The holder type and the relative
//! pronoun `which` are stripped. The linking word (`with` / `contains`) stays at
//! the front of the constraint tokens because it is itself a keyword: it opens
//! the type-membership constraint.

use std::fmt;
use std::str::FromStr;

use crate::config::ParserConfig;
use crate::error::NameError;
use crate::lexer::tokenize;

/// The holder type a name declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolderKind {
    Scalar,
    Arrayref,
    Hashref,
}

impl HolderKind {
    pub fn name(&self) -> &'static str {
        match self {
            HolderKind::Scalar => "scalar",
            HolderKind::Arrayref => "arrayref",
            HolderKind::Hashref => "hashref",
        }
    }
}

impl FromStr for HolderKind {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "scalar" => Ok(HolderKind::Scalar),
            "arrayref" => Ok(HolderKind::Arrayref),
            "hashref" => Ok(HolderKind::Hashref),
            _ => Err(()),
        }
    }
}

impl fmt::Display for HolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name split into its holder type and constraint tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub holder: HolderKind,
    /// Tokens after the prefix, starting with the linking word.
    pub tokens: Vec<String>,
}

/// Split `name` using the default separator.
pub fn split_name(name: &str) -> Result<NameParts, NameError> {
    split_name_with(name, &ParserConfig::default())
}

/// Split `name` using the separator from `config`.
pub fn split_name_with(name: &str, config: &ParserConfig) -> Result<NameParts, NameError> {
    let mut tokens = tokenize(name, config.separator);
    let Some(first) = tokens.first() else {
        return Err(NameError::Empty);
    };
    let holder = first
        .parse::<HolderKind>()
        .map_err(|_| NameError::unknown_holder_type(name, first.as_str()))?;

    let linker = match tokens.get(1).map(String::as_str) {
        Some("with") => 1,
        Some("which") if tokens.get(2).map(String::as_str) == Some("contains") => 2,
        _ => return Err(NameError::missing_linker(name)),
    };

    Ok(NameParts {
        holder,
        tokens: tokens.split_off(linker),
    })
}
