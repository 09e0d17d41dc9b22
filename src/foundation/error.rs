//! Structured validation errors.
//!
//! All string fields use `Cow<'static, str>` for zero allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

type Str = Cow<'static, str>;

/// A structured validation error with an error code, a human-readable
/// message, and optional key-value parameters.
///
/// The code is stable and meant for programmatic handling; the message is
/// what a UI shows next to the offending field.
///
/// # Examples
///
/// ```rust,ignore
/// let error = ValidationError::new("min_length", "Password must be at least 6 characters")
///     .with_param("min", "6");
/// assert_eq!(error.param("min"), Some("6"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code, e.g. "required", "invalid_format".
    pub code: Str,

    /// Human-readable message in English.
    pub message: Str,

    /// Parameters for the message, typically 0-2 entries.
    pub params: SmallVec<[(Str, Str); 2]>,
}

impl ValidationError {
    /// Creates a new validation error from a code and a message.
    ///
    /// Static strings do not allocate; dynamic strings allocate only once.
    pub fn new(code: impl Into<Str>, message: impl Into<Str>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Str>, value: impl Into<Str>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping the code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Str>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Str>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "mismatch" error.
    #[must_use]
    pub fn mismatch() -> Self {
        Self::new("mismatch", "Values do not match")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::min_length(6, 3);
        assert_eq!(error.param("min"), Some("6"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn with_message_keeps_code() {
        let error = ValidationError::required().with_message("Username is required");
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "Username is required");
    }

    #[test]
    fn display_includes_params() {
        let error = ValidationError::new("min_length", "Too short")
            .with_param("min", "6")
            .with_param("actual", "2");
        assert_eq!(error.to_string(), "min_length: Too short (min=6, actual=2)");
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::required();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn dynamic_strings_allocate() {
        let error = ValidationError::new(format!("error_{}", 42), "Dynamic");
        assert!(matches!(error.code, Cow::Owned(_)));
    }
}
