//! Type membership constraint.

use std::fmt;
use std::str::FromStr;

use strictname_core::{Value, ValueKind, MSG_TYPE_NOT_ALLOWED};

use crate::constraint::{Argument, Arity, Constraint};
use crate::error::ConstraintError;

/// Words that may separate type tags without ending the list.
const CONJUNCTIONS: &[&str] = &["and", "or"];

/// A type tag accepted by [`Contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Integers,
    Floats,
    Strings,
    /// Structured mapping.
    Hashrefs,
    /// Ordered sequence.
    Arrayrefs,
}

impl TypeTag {
    pub const ALL: [TypeTag; 5] = [
        TypeTag::Integers,
        TypeTag::Floats,
        TypeTag::Strings,
        TypeTag::Hashrefs,
        TypeTag::Arrayrefs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Integers => "integers",
            TypeTag::Floats => "floats",
            TypeTag::Strings => "strings",
            TypeTag::Hashrefs => "hashrefs",
            TypeTag::Arrayrefs => "arrayrefs",
        }
    }

    /// The value kind this tag admits.
    pub fn kind(&self) -> ValueKind {
        match self {
            TypeTag::Integers => ValueKind::Int,
            TypeTag::Floats => ValueKind::Float,
            TypeTag::Strings => ValueKind::String,
            TypeTag::Hashrefs => ValueKind::Map,
            TypeTag::Arrayrefs => ValueKind::List,
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        value.kind() == self.kind()
    }
}

impl FromStr for TypeTag {
    type Err = ConstraintError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ConstraintError::unknown_type_tag(token))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `contains TAG [and|or TAG]...`: the value's type must match one of the tags.
///
/// Tags are OR-ed within the one constraint. The instance keeps absorbing tags
/// until it sees a token that is neither a tag nor a conjunction; from then on
/// it takes nothing more.
#[derive(Debug, Clone, Default)]
pub struct Contains {
    tags: Vec<TypeTag>,
    args: Vec<Argument>,
    closed: bool,
}

impl Contains {
    pub const NAME: &'static str = "contains";
    pub const KEYWORDS: &'static [&'static str] = &["contains", "containing", "with"];
    pub const DESCRIPTION: &'static str = "value whose type is one of the listed type tags";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }
}

impl Constraint for Contains {
    fn keywords(&self) -> &'static [&'static str] {
        Self::KEYWORDS
    }

    fn arity(&self) -> Arity {
        Arity::Variadic
    }

    fn args(&self) -> &[Argument] {
        &self.args
    }

    fn consume(&mut self, token: &str) -> bool {
        if self.closed {
            return false;
        }
        match token.parse::<TypeTag>() {
            Ok(tag) => {
                if !self.tags.contains(&tag) {
                    self.tags.push(tag);
                    self.args.push(Argument::Word(tag.name().to_string()));
                }
                true
            }
            Err(_) => {
                if !CONJUNCTIONS.contains(&token) {
                    self.closed = true;
                }
                false
            }
        }
    }

    fn hungry(&self) -> bool {
        !self.closed
    }

    fn validate(&self, value: &Value) -> bool {
        self.tags.iter().any(|tag| tag.matches(value))
    }

    fn describe(&self) -> String {
        if self.tags.is_empty() {
            return "contains ?".to_string();
        }
        let names: Vec<&str> = self.tags.iter().map(TypeTag::name).collect();
        format!("contains {}", names.join(" or "))
    }

    fn explain(&self, value: &Value) -> Option<String> {
        if self.validate(value) {
            None
        } else {
            Some(format!(
                "{}: {} is {}, expected {}",
                MSG_TYPE_NOT_ALLOWED,
                value,
                value.type_name(),
                self.describe().trim_start_matches("contains ")
            ))
        }
    }
}
