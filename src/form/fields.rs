//! Form field identifiers and the mutable field set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD NAME
// ============================================================================

/// Identifies one of the four signup form fields.
///
/// The variant order is the display order of the form, and therefore the
/// order errors appear in a [`ValidationReport`](crate::form::ValidationReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Raised when a string-keyed field update names a field the form does
/// not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownField(pub String);

impl FieldName {
    /// All fields, in display order.
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// The wire/markup name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(FieldName::Username),
            "email" => Ok(FieldName::Email),
            "password" => Ok(FieldName::Password),
            "confirmPassword" => Ok(FieldName::ConfirmPassword),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

// ============================================================================
// FORM FIELDS
// ============================================================================

/// The raw text of the four signup fields.
///
/// Created empty at form-session start, mutated on every edit, and read in
/// full by each validation pass. Values are kept exactly as entered; the
/// rules decide where trimming applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }
}

// ============================================================================
// TESTS
// ============================================================================
