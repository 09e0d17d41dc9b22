//! String presence and length validators.
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use crate::foundation::ValidationError;

// ============================================================================
// NOT BLANK
// ============================================================================

crate::validator! {
    /// Rejects strings that are empty after trimming leading and trailing
    /// whitespace.
    ///
    /// A whitespace-only value counts as missing, which is how "required"
    /// fields behave in the form rules.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required() }
    fn not_blank();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    ///
    /// The raw value is measured; surrounding whitespace counts toward the
    /// length. Combine with [`NotBlank`] for required fields.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// TESTS
// ============================================================================
