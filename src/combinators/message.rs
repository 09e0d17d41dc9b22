//! MESSAGE combinator.
//!
//! Replaces the error message of a validator while keeping its code and
//! params. Field rules use this to attach the exact user-facing text a
//! form shows next to each field.

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of the inner validator.
///
/// # Examples
///
/// ```rust,ignore
/// let rule = min_length(6).with_message("Password must be at least 6 characters");
/// let err = rule.validate("abc").unwrap_err();
/// assert_eq!(err.message, "Password must be at least 6 characters");
/// assert_eq!(err.code, "min_length"); // code is preserved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithMessage<V> {
    inner: V,
    message: &'static str,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: &'static str) -> Self {
        Self { inner, message }
    }

    /// Returns the custom message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message))
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V: Validate>(inner: V, message: &'static str) -> WithMessage<V> {
    WithMessage::new(inner, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::min_length;

    #[test]
    fn passes_through_success() {
        let v = min_length(3).with_message("custom");
        assert!(v.validate("hello").is_ok());
    }

    #[test]
    fn replaces_message_keeps_code() {
        let v = min_length(10).with_message("Way too short");
        let err = v.validate("short").unwrap_err();
        assert_eq!(err.message, "Way too short");
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn params_survive() {
        let v = min_length(10).with_message("Way too short");
        let err = v.validate("short").unwrap_err();
        assert_eq!(err.param("min"), Some("10"));
        assert_eq!(err.param("actual"), Some("5"));
    }
}
