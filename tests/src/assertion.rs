//! Assertion types and builders for verifying write outcomes.

use strictname_core::Value;
use strictname_holder::{Constrained, HolderResult};

/// Expected outcome of one write.
#[derive(Debug, Default)]
pub struct Assertion {
    pub accepted: Option<bool>,
    pub rejected_by: Option<usize>,
    pub constraint: Option<String>,
    pub message: Option<String>,

    // State after the write. `Some(None)` means the holder must be unset.
    pub stored: Option<Option<Value>>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the write to succeed.
    pub fn accepted(mut self) -> Self {
        self.accepted = Some(true);
        self
    }

    /// Expect the write to fail.
    pub fn rejected(mut self) -> Self {
        self.accepted = Some(false);
        self
    }

    /// Expect the write to fail on the constraint at `index`.
    pub fn rejected_by(mut self, index: usize) -> Self {
        self.accepted = Some(false);
        self.rejected_by = Some(index);
        self
    }

    /// Expect the rejecting constraint to describe itself as `description`.
    pub fn constraint(mut self, description: impl Into<String>) -> Self {
        self.constraint = Some(description.into());
        self
    }

    /// Expect the violation message to contain `fragment`.
    pub fn message(mut self, fragment: impl Into<String>) -> Self {
        self.message = Some(fragment.into());
        self
    }

    /// Expect the holder to hold `value` afterwards.
    pub fn stored(mut self, value: impl Into<Value>) -> Self {
        self.stored = Some(Some(value.into()));
        self
    }

    /// Expect the holder to be unset afterwards.
    pub fn unset(mut self) -> Self {
        self.stored = Some(None);
        self
    }

    /// Check `outcome` and the holder state. Returns a description of the
    /// first mismatch.
    pub fn verify(&self, outcome: &HolderResult<()>, holder: &Constrained) -> Result<(), String> {
        if let Some(expected) = self.accepted {
            match (expected, outcome) {
                (true, Err(e)) => return Err(format!("expected write to be accepted, got: {}", e)),
                (false, Ok(())) => return Err("expected write to be rejected".to_string()),
                _ => {}
            }
        }

        if self.rejected_by.is_some() || self.constraint.is_some() || self.message.is_some() {
            let Err(error) = outcome else {
                return Err("expected a violation, write was accepted".to_string());
            };
            let Some(violation) = error.violation() else {
                return Err(format!("expected a violation, got: {}", error));
            };
            if let Some(index) = self.rejected_by {
                if violation.index != index {
                    return Err(format!(
                        "expected rejection by constraint #{}, got #{} ({})",
                        index, violation.index, violation.constraint
                    ));
                }
            }
            if let Some(description) = &self.constraint {
                if &violation.constraint != description {
                    return Err(format!(
                        "expected rejecting constraint '{}', got '{}'",
                        description, violation.constraint
                    ));
                }
            }
            if let Some(fragment) = &self.message {
                if !violation.message.contains(fragment.as_str()) {
                    return Err(format!(
                        "expected message containing '{}', got '{}'",
                        fragment, violation.message
                    ));
                }
            }
        }

        if let Some(expected) = &self.stored {
            if holder.read() != expected.as_ref() {
                return Err(format!(
                    "expected stored value {:?}, found {:?}",
                    expected,
                    holder.read()
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepted_and_stored() {
        let mut holder = Constrained::from_name("scalar_with_integers").unwrap();
        let outcome = holder.write(3i64);

        let assertion = Assertion::new().accepted().stored(3i64);

        assert_eq!(assertion.verify(&outcome, &holder), Ok(()));
    }

    #[test]
    fn test_verify_reports_wrong_index() {
        let mut holder = Constrained::from_name("scalar_with_integers_between_1_and_2").unwrap();
        let outcome = holder.write(5i64);

        let result = Assertion::new().rejected_by(0).verify(&outcome, &holder);

        assert!(result.unwrap_err().contains("#1"));
    }
}
