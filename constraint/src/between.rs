//! Inclusive numeric range constraint.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex_lite::Regex;
use strictname_core::{Value, MSG_MISSING_BOUNDS, MSG_NOT_NUMERIC, MSG_OUT_OF_RANGE};

use crate::constraint::{Argument, Arity, Constraint};
use crate::error::{ConstraintError, ConstraintResult};

/// Optional sign, then digits with an optional fraction, or a bare fraction.
/// Exponents are not accepted.
const NUMERIC_TOKEN: &str = r"^[+-]?(\d+(\.\d*)?|\.\d+)$";

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NUMERIC_TOKEN).expect("numeric token pattern compiles"))
}

/// Whether `token` looks like a numeric bound.
pub fn is_numeric_token(token: &str) -> bool {
    numeric_pattern().is_match(token)
}

/// Parse a numeric bound token.
pub fn parse_bound(token: &str) -> ConstraintResult<f64> {
    if !is_numeric_token(token) {
        return Err(ConstraintError::not_numeric(token));
    }
    token
        .parse::<f64>()
        .map_err(|_| ConstraintError::not_numeric(token))
}

/// Parse a numeric bound token, keeping whole numbers that fit in `i64` exact.
pub fn parse_bound_argument(token: &str) -> ConstraintResult<Argument> {
    let bound = parse_bound(token)?;
    if !token.contains('.') {
        if let Ok(n) = token.trim_start_matches('+').parse::<i64>() {
            return Ok(Argument::Integer(n));
        }
    }
    Ok(Argument::Number(bound))
}

/// A number taken from a bound or a candidate value.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    fn from_argument(argument: &Argument) -> Option<Self> {
        match argument {
            Argument::Integer(n) => Some(Numeric::Int(*n)),
            Argument::Number(n) => Some(Numeric::Float(*n)),
            Argument::Word(_) => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(Numeric::Int(*n)),
            Value::Float(n) => Some(Numeric::Float(*n)),
            _ => None,
        }
    }

    /// Exact ordering. `None` when either side is NaN.
    fn compare(self, other: Numeric) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(&b)),
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b),
            (Numeric::Int(a), Numeric::Float(b)) => compare_int_float(a, b),
            (Numeric::Float(a), Numeric::Int(b)) => compare_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Compare an integer with a float without rounding the integer.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // `as` saturates, and every i64 lies strictly inside the i128 range.
    let floor = float.floor() as i128;
    let int = int as i128;
    match int.cmp(&floor) {
        Ordering::Equal if float != float.floor() => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

/// `between LOW and HIGH`: the value must be numeric and lie in `[LOW, HIGH]`.
///
/// Bounds are kept sorted, so `between 2000 and 50` means the same as
/// `between 50 and 2000`. Whole-number bounds and integer values are compared
/// exactly; NaN lies in no range.
#[derive(Debug, Clone, Default)]
pub struct Between {
    bounds: Vec<Argument>,
}

impl Between {
    pub const NAME: &'static str = "between";
    pub const KEYWORDS: &'static [&'static str] = &["between", "betwixt", "surrounded"];
    pub const DESCRIPTION: &'static str = "numeric value within an inclusive range";

    pub fn new() -> Self {
        Self::default()
    }

    /// The `(low, high)` pair once both bounds are present.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.bounds.as_slice() {
            [low, high] => Some((low.as_number()?, high.as_number()?)),
            _ => None,
        }
    }

    /// Whether `value` lies in the range. `None` if the range is incomplete or
    /// the value is not a number.
    fn contains_value(&self, value: &Value) -> Option<bool> {
        let [low, high] = self.bounds.as_slice() else {
            return None;
        };
        let low = Numeric::from_argument(low)?;
        let high = Numeric::from_argument(high)?;
        let v = Numeric::from_value(value)?;
        let above_low = matches!(low.compare(v), Some(Ordering::Less | Ordering::Equal));
        let below_high = matches!(v.compare(high), Some(Ordering::Less | Ordering::Equal));
        Some(above_low && below_high)
    }
}

impl Constraint for Between {
    fn keywords(&self) -> &'static [&'static str] {
        Self::KEYWORDS
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn args(&self) -> &[Argument] {
        &self.bounds
    }

    fn consume(&mut self, token: &str) -> bool {
        if self.bounds.len() >= 2 {
            return false;
        }
        let Ok(bound) = parse_bound_argument(token) else {
            return false;
        };
        self.bounds.push(bound);
        self.bounds.sort_by(|a, b| {
            match (Numeric::from_argument(a), Numeric::from_argument(b)) {
                (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        });
        true
    }

    fn validate(&self, value: &Value) -> bool {
        self.contains_value(value).unwrap_or(false)
    }

    fn describe(&self) -> String {
        match self.bounds.as_slice() {
            [low, high] => format!("between {} and {}", low, high),
            [low] => format!("between {} and ?", low),
            _ => "between ? and ?".to_string(),
        }
    }

    fn explain(&self, value: &Value) -> Option<String> {
        let [low, high] = self.bounds.as_slice() else {
            return Some(MSG_MISSING_BOUNDS.to_string());
        };
        match self.contains_value(value) {
            Some(true) => None,
            Some(false) => Some(format!("{}: {} not in [{}, {}]", MSG_OUT_OF_RANGE, value, low, high)),
            None => Some(format!("{}: {} is {}", MSG_NOT_NUMERIC, value, value.type_name())),
        }
    }
}
