//! The constraint interface shared by every kind.

use std::fmt;

use strictname_core::Value;

/// Number of arguments a constraint needs before it is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly `n` arguments. `Exact(0)` is a flag-like kind that takes none.
    Exact(usize),
    /// One or more arguments.
    Variadic,
}

impl Arity {
    /// Build an arity from a declared count. Zero means variadic.
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Arity::Variadic
        } else {
            Arity::Exact(count)
        }
    }

    /// The declared count, zero for variadic.
    pub fn count(&self) -> usize {
        match self {
            Arity::Exact(n) => *n,
            Arity::Variadic => 0,
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, Arity::Variadic)
    }

    /// Whether `consumed` arguments meet this arity.
    pub fn is_satisfied_by(&self, consumed: usize) -> bool {
        match self {
            Arity::Exact(n) => consumed == *n,
            Arity::Variadic => consumed >= 1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Variadic => write!(f, "1+"),
        }
    }
}

/// A token consumed by a constraint as one of its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A whole-number token that fits in `i64`, kept exact.
    Integer(i64),
    Number(f64),
    Word(String),
}

impl Argument {
    /// The numeric value, widened to `f64` for integers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Argument::Integer(n) => Some(*n as f64),
            Argument::Number(n) => Some(*n),
            Argument::Word(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Argument::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Argument::Word(w) => Some(w),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Integer(n) => write!(f, "{}", n),
            Argument::Number(n) => write!(f, "{}", n),
            Argument::Word(w) => f.write_str(w),
        }
    }
}

/// A single instantiated constraint.
///
/// A fresh instance starts with no arguments. The parser offers it tokens via
/// [`consume`](Constraint::consume) while it is [`hungry`](Constraint::hungry);
/// once parsing moves on, the instance is kept only if it
/// [`is_satisfied`](Constraint::is_satisfied).
pub trait Constraint: fmt::Debug + Send + Sync {
    /// Keywords that select this kind.
    fn keywords(&self) -> &'static [&'static str];

    fn arity(&self) -> Arity;

    /// Arguments consumed so far, in the kind's own order.
    fn args(&self) -> &[Argument];

    /// Offer a token as an argument. Returns whether it was accepted; the
    /// argument list only changes on acceptance.
    fn consume(&mut self, token: &str) -> bool;

    /// Whether the instance still wants arguments.
    fn hungry(&self) -> bool {
        match self.arity() {
            Arity::Exact(n) => self.args().len() < n,
            Arity::Variadic => true,
        }
    }

    /// Whether the instance has consumed enough arguments to be kept.
    fn is_satisfied(&self) -> bool {
        self.arity().is_satisfied_by(self.args().len())
    }

    /// Check a candidate value.
    fn validate(&self, value: &Value) -> bool;

    /// Human-readable rendering, e.g. `between 10 and 5000`.
    fn describe(&self) -> String;

    /// Reason `value` is rejected, or `None` if it passes.
    fn explain(&self, value: &Value) -> Option<String> {
        if self.validate(value) {
            None
        } else {
            Some(format!("{} does not satisfy '{}'", value, self.describe()))
        }
    }
}
