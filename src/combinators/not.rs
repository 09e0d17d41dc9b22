//! NOT combinator.
//!
//! Succeeds when the inner validator fails, and vice versa.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "negation",
                "Value must not satisfy the inner rule",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}
