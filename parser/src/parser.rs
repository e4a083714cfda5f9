//! Greedy single-pass constraint parser.
//!
//! Each token is offered first to the current constraint while it is hungry;
//! only a token it refuses may select a new kind. Tokens that do neither are
//! filler and are discarded.

use strictname_constraint::{Argument, Arity};
use strictname_registry::{ConstraintInstance, Registry};
use tracing::{debug, trace, warn};

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};

/// A constraint that never reached its minimum arity and was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedConstraint {
    /// Kind name.
    pub kind: &'static str,
    /// Keyword that opened it.
    pub keyword: String,
    /// Token index of the keyword.
    pub position: usize,
    /// Arguments consumed before it was abandoned.
    pub args: Vec<Argument>,
    pub required: Arity,
}

/// Outcome of parsing a token sequence.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Complete constraints in parse order.
    pub constraints: Vec<ConstraintInstance>,
    /// Incomplete constraints, in the order they were abandoned.
    pub dropped: Vec<DroppedConstraint>,
    /// Filler tokens.
    pub discarded: Vec<String>,
}

/// Parser bound to a registry.
#[derive(Debug, Clone)]
pub struct Parser<'r> {
    registry: &'r Registry,
    config: ParserConfig,
}

/// An instance under construction together with where its keyword sat.
struct Open {
    instance: ConstraintInstance,
    position: usize,
}

impl<'r> Parser<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `tokens`. In strict mode the first incomplete constraint is an error.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult<Parsed> {
        let parsed = self.parse_lenient(tokens);
        if self.config.strict {
            if let Some(dropped) = parsed.dropped.first() {
                return Err(ParseError::incomplete(
                    dropped.keyword.clone(),
                    dropped.position,
                    dropped.args.len(),
                    dropped.required,
                ));
            }
        }
        Ok(parsed)
    }

    /// Parse `tokens`, dropping incomplete constraints regardless of mode.
    pub fn parse_lenient<S: AsRef<str>>(&self, tokens: &[S]) -> Parsed {
        let mut parsed = Parsed::default();
        let mut current: Option<Open> = None;

        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref().to_ascii_lowercase();

            if let Some(open) = current.as_mut() {
                if open.instance.hungry() && open.instance.consume(&token) {
                    trace!(token = %token, kind = open.instance.name(), "argument");
                    continue;
                }
            }

            if let Some(kind) = self.registry.lookup(&token) {
                trace!(token = %token, kind = kind.name, "keyword");
                if let Some(open) = current.take() {
                    finalize(open, &mut parsed);
                }
                current = Some(Open {
                    instance: kind.instantiate(token),
                    position,
                });
                continue;
            }

            trace!(token = %token, "filler");
            parsed.discarded.push(token);
        }

        if let Some(open) = current.take() {
            finalize(open, &mut parsed);
        }

        debug!(
            tokens = tokens.len(),
            constraints = parsed.constraints.len(),
            dropped = parsed.dropped.len(),
            discarded = parsed.discarded.len(),
            "parsed constraints"
        );
        parsed
    }
}

fn finalize(open: Open, parsed: &mut Parsed) {
    let Open { instance, position } = open;
    if instance.is_satisfied() {
        parsed.constraints.push(instance);
        return;
    }

    warn!(
        keyword = instance.keyword(),
        position,
        consumed = instance.args().len(),
        required = %instance.arity(),
        "dropping incomplete constraint"
    );
    parsed.dropped.push(DroppedConstraint {
        kind: instance.name(),
        keyword: instance.keyword().to_string(),
        position,
        args: instance.args().to_vec(),
        required: instance.arity(),
    });
}

/// Parse `tokens` against the standard registry, dropping incomplete constraints.
pub fn parse_constraints<S: AsRef<str>>(tokens: &[S]) -> Vec<ConstraintInstance> {
    Parser::new(Registry::standard())
        .parse_lenient(tokens)
        .constraints
}
