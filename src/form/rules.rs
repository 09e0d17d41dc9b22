//! The signup rule set.
//!
//! One pure function from the current field values to a
//! [`ValidationReport`]. Every pass re-runs all four field rules
//! unconditionally; there is no incremental diffing, which keeps the
//! engine trivially testable and safe to call on every keystroke.

use crate::foundation::{Validate, ValidateExt};
use crate::validators::{contains_special, email_shape, equals, min_length, not_blank};

use super::{FieldName, FormFields, ValidationReport};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Messages shown next to the fields, exactly as the form displays them.
pub mod messages {
    pub const USERNAME_REQUIRED: &str = "Username is required";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Email address is invalid";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
    pub const PASSWORD_NO_SPECIAL: &str = "Password must contain at least one special character";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
}

/// Validates the whole form.
///
/// Each field reports at most one error. The password chain is evaluated
/// in priority order (required, then length, then special character) via
/// `And` short-circuiting. The confirm-password comparison is exact and
/// independent of whether the password field itself has an error.
///
/// Deterministic and side-effect free: identical fields produce an
/// identical report.
#[must_use]
pub fn validate(fields: &FormFields) -> ValidationReport {
    let username_rule = not_blank().with_message(messages::USERNAME_REQUIRED);
    let email_rule = not_blank()
        .with_message(messages::EMAIL_REQUIRED)
        .and(email_shape().with_message(messages::EMAIL_INVALID));
    let password_rule = not_blank()
        .with_message(messages::PASSWORD_REQUIRED)
        .and(min_length(MIN_PASSWORD_LENGTH).with_message(messages::PASSWORD_TOO_SHORT))
        .and(contains_special().with_message(messages::PASSWORD_NO_SPECIAL));
    let confirm_rule =
        equals(&fields.password).with_message(messages::PASSWORDS_DO_NOT_MATCH);

    let mut report = ValidationReport::new();
    if let Err(error) = username_rule.validate(&fields.username) {
        report.push(FieldName::Username, error);
    }
    if let Err(error) = email_rule.validate(&fields.email) {
        report.push(FieldName::Email, error);
    }
    if let Err(error) = password_rule.validate(&fields.password) {
        report.push(FieldName::Password, error);
    }
    if let Err(error) = confirm_rule.validate(&fields.confirm_password) {
        report.push(FieldName::ConfirmPassword, error);
    }
    report
}

// ============================================================================
// TESTS
// ============================================================================
