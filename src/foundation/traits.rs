//! Core traits of the validation system.

use crate::combinators::{And, Not, Or, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over their input type and return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Examples
///
/// ```rust,ignore
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type being validated. `?Sized` so validators can take `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods, automatically available on every validator.
///
/// # Examples
///
/// ```rust,ignore
/// let password = not_blank()
///     .and(min_length(6))
///     .and(contains_special());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, so a chain reports at most
    /// one error, in chain order.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Replaces the error message, keeping the error code.
    ///
    /// This is how field rules attach user-facing text to generic
    /// predicates.
    fn with_message(self, message: &'static str) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn validate_trait() {
        assert!(AlwaysValid.validate("anything").is_ok());
    }

    #[test]
    fn ext_is_blanket_implemented() {
        let v = AlwaysValid.and(AlwaysValid);
        assert!(v.validate("x").is_ok());
    }
}
