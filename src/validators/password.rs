//! Password character-class validators.

use crate::foundation::ValidationError;

/// Characters the signup rules accept as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

// ============================================================================
// CONTAINS SPECIAL
// ============================================================================

crate::validator! {
    /// Validates that a string contains at least one character from a
    /// special-character set.
    pub ContainsSpecial { charset: &'static str } for str;
    rule(self, input) { input.chars().any(|c| self.charset.contains(c)) }
    error(self, input) {
        ValidationError::new("missing_special", "Must contain a special character")
            .with_param("charset", self.charset)
    }
    new() {
        Self {
            charset: SPECIAL_CHARS,
        }
    }
    fn contains_special();
}

impl ContainsSpecial {
    /// Creates a validator over a custom special-character set.
    #[must_use]
    pub fn from_charset(charset: &'static str) -> Self {
        Self { charset }
    }
}

// ============================================================================
// TESTS
// ============================================================================
