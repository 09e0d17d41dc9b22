//! The result of one validation pass.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::foundation::ValidationError;

use super::FieldName;

/// An ordered field-to-error mapping produced by one full validation pass.
///
/// A field is absent when it has no error; validity is derived from
/// emptiness rather than stored, so the two can never disagree. Each pass
/// rebuilds the report from scratch; reports are never patched
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(FieldName, ValidationError)>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against a field.
    ///
    /// The rules produce at most one error per field; insertion order is
    /// the form's display order.
    pub fn push(&mut self, field: FieldName, error: ValidationError) {
        self.errors.push((field, error));
    }

    /// True when no field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the report holds no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error recorded for a field, if any.
    #[must_use]
    pub fn error_for(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    /// The display message recorded for a field, if any.
    #[must_use]
    pub fn message_for(&self, field: FieldName) -> Option<&str> {
        self.error_for(field).map(|e| e.message.as_ref())
    }

    /// Iterates over `(field, error)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ValidationError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    /// Renders the report as a `{"field": "message"}` JSON object for the
    /// rendering layer.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("report serialization cannot fail")
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), error.message.as_ref())?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        writeln!(f, "{} field error(s):", self.errors.len())?;
        for (field, error) in &self.errors {
            writeln!(f, "  {}: {}", field, error.message)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn validity_is_derived_from_errors() {
        let mut report = ValidationReport::new();
        report.push(FieldName::Username, ValidationError::required());
        assert!(!report.is_valid());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn message_lookup() {
        let mut report = ValidationReport::new();
        report.push(
            FieldName::Email,
            ValidationError::invalid_format("email").with_message("Email address is invalid"),
        );
        assert_eq!(
            report.message_for(FieldName::Email),
            Some("Email address is invalid")
        );
        assert_eq!(report.message_for(FieldName::Username), None);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut report = ValidationReport::new();
        report.push(FieldName::Username, ValidationError::required());
        report.push(FieldName::Password, ValidationError::required());
        let fields: Vec<FieldName> = report.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FieldName::Username, FieldName::Password]);
    }

    #[test]
    fn json_is_field_to_message_map() {
        let mut report = ValidationReport::new();
        report.push(
            FieldName::ConfirmPassword,
            ValidationError::mismatch().with_message("Passwords do not match"),
        );
        let json = report.to_json();
        assert_eq!(json["confirmPassword"], "Passwords do not match");
    }

    #[test]
    fn empty_report_serializes_to_empty_object() {
        assert_eq!(
            ValidationReport::new().to_json(),
            serde_json::json!({})
        );
    }
}
