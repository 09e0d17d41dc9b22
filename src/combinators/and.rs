//! AND combinator.
//!
//! Both validators must pass. Validation short-circuits on the first
//! failure, so the left validator's error wins. Field rules rely on this
//! to report at most one error per field, in priority order.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// # Examples
///
/// ```rust,ignore
/// let rule = not_blank().and(min_length(6));
/// assert!(rule.validate("secret").is_ok());
/// assert!(rule.validate("hi").is_err()); // fails min_length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
