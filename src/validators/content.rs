//! String content validators.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Deliberately unanchored: the check is a substring search for
// "non-space run, '@', non-space run, '.', non-space run". This is a
// minimal structural sanity check, not RFC 5322 validation.
static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

// ============================================================================
// EMAIL SHAPE
// ============================================================================

crate::validator! {
    /// Validates that a string looks like an email address.
    ///
    /// Accepts anything containing `something@something.something` with no
    /// whitespace inside the match. Definitive verification belongs to a
    /// confirmation mail, not a regex.
    pub EmailShape { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email_shape();
}

// ============================================================================
// TESTS
// ============================================================================
