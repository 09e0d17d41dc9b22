//! Equality validator.
//!
//! Hand-implemented rather than going through [`validator!`](crate::validator)
//! because the expected value is borrowed for the duration of one
//! validation pass.

use crate::foundation::{Validate, ValidationError};

/// Validates that a string equals an expected value, byte for byte.
///
/// Built per validation pass against the current expected value:
///
/// ```rust,ignore
/// let rule = equals(&fields.password);
/// rule.validate(&fields.confirm_password)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equals<'a> {
    expected: &'a str,
}

impl<'a> Equals<'a> {
    /// Creates a new equality validator.
    #[must_use]
    pub fn new(expected: &'a str) -> Self {
        Self { expected }
    }
}

impl Validate for Equals<'_> {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == self.expected {
            Ok(())
        } else {
            Err(ValidationError::mismatch())
        }
    }
}

/// Creates an equality validator.
#[must_use]
pub fn equals(expected: &str) -> Equals<'_> {
    Equals::new(expected)
}
