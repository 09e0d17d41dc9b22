//! The form session: externally-owned mutable state plus the thin
//! submission controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::strength::PasswordStrength;

use super::{FieldName, FormFields, UnknownField, ValidationReport, rules};

// ============================================================================
// SUBMISSION STATUS
// ============================================================================

/// Outcome of the most recent submit attempt.
///
/// Starts at [`Idle`](SubmissionStatus::Idle) and is overwritten on every
/// attempt. `Success` is only ever set from a freshly computed, valid
/// report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// No submit attempt yet.
    #[default]
    Idle,
    /// The last attempt passed validation.
    Success,
    /// The last attempt failed validation.
    Error,
}

// ============================================================================
// FORM SESSION
// ============================================================================

/// One signup form in progress.
///
/// Owns the field values and the state derived from them: the error
/// report of the last submit, the live password-strength grade, and the
/// submission status. All methods are synchronous; validation runs on the
/// caller's thread with no reentrancy hazards.
///
/// The rendering layer drives the session through
/// [`field_changed`](FormSession::field_changed) and
/// [`submit`](FormSession::submit), and reads back the snapshot getters
/// for display.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    fields: FormFields,
    report: ValidationReport,
    strength: Option<PasswordStrength>,
    status: SubmissionStatus,
}

impl FormSession {
    /// Creates a fresh session with empty fields and no submit attempt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a field edit.
    ///
    /// Editing the password reclassifies its strength immediately; the
    /// error report is left untouched until the next submit, so messages
    /// from the last attempt stay visible while the user types.
    pub fn field_changed(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        if field == FieldName::Password {
            self.strength = Some(PasswordStrength::classify(&value));
        }
        trace!(field = %field, len = value.chars().count(), "field edited");
        self.fields.set(field, value);
    }

    /// Applies a field edit keyed by the field's string name.
    ///
    /// This is the seam for rendering layers that only know markup names.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] when the name does not match any form
    /// field; the session is left unchanged.
    pub fn field_changed_by_name(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = field.parse::<FieldName>()?;
        self.field_changed(field, value);
        Ok(())
    }

    /// Runs a full validation pass and records the outcome.
    ///
    /// The previous report and status are overwritten either way. Nothing
    /// is persisted or sent anywhere on success.
    pub fn submit(&mut self) -> SubmissionStatus {
        let report = rules::validate(&self.fields);
        self.status = if report.is_valid() {
            debug!("form is valid, accepting submission");
            SubmissionStatus::Success
        } else {
            debug!(errors = report.len(), "form has errors, rejecting submission");
            SubmissionStatus::Error
        };
        self.report = report;
        self.status
    }

    /// The current field values.
    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// The error report from the last submit attempt.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The strength of the current password, or `None` if the password
    /// has never been edited.
    #[must_use]
    pub fn password_strength(&self) -> Option<PasswordStrength> {
        self.strength
    }

    /// The outcome of the last submit attempt.
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::rules::messages;

    fn filled_session() -> FormSession {
        let mut session = FormSession::new();
        session.field_changed(FieldName::Username, "joe");
        session.field_changed(FieldName::Email, "joe@x.com");
        session.field_changed(FieldName::Password, "Abc123!");
        session.field_changed(FieldName::ConfirmPassword, "Abc123!");
        session
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = FormSession::new();
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(session.report().is_valid());
        assert_eq!(session.password_strength(), None);
        assert_eq!(session.fields(), &FormFields::default());
    }

    #[test]
    fn valid_submit_succeeds() {
        let mut session = filled_session();
        assert_eq!(session.submit(), SubmissionStatus::Success);
        assert_eq!(session.status(), SubmissionStatus::Success);
        assert!(session.report().is_valid());
    }

    #[test]
    fn invalid_submit_errors_and_keeps_report() {
        let mut session = filled_session();
        session.field_changed(FieldName::ConfirmPassword, "Abc123");
        assert_eq!(session.submit(), SubmissionStatus::Error);
        assert_eq!(
            session.report().message_for(FieldName::ConfirmPassword),
            Some(messages::PASSWORDS_DO_NOT_MATCH)
        );
    }

    #[test]
    fn status_is_overwritten_on_each_attempt() {
        let mut session = filled_session();
        session.field_changed(FieldName::Username, "");
        assert_eq!(session.submit(), SubmissionStatus::Error);

        session.field_changed(FieldName::Username, "joe");
        assert_eq!(session.submit(), SubmissionStatus::Success);
        assert!(session.report().is_valid());
    }

    #[test]
    fn password_edit_updates_strength() {
        let mut session = FormSession::new();
        session.field_changed(FieldName::Password, "ab");
        assert_eq!(session.password_strength(), Some(PasswordStrength::Weak));
        session.field_changed(FieldName::Password, "abcdef");
        assert_eq!(session.password_strength(), Some(PasswordStrength::Medium));
        session.field_changed(FieldName::Password, "Abcdef1");
        assert_eq!(session.password_strength(), Some(PasswordStrength::Strong));
    }

    #[test]
    fn non_password_edits_leave_strength_alone() {
        let mut session = FormSession::new();
        session.field_changed(FieldName::Username, "joe");
        assert_eq!(session.password_strength(), None);
    }

    #[test]
    fn edits_do_not_clear_the_report() {
        let mut session = FormSession::new();
        session.submit();
        assert!(!session.report().is_valid());
        session.field_changed(FieldName::Username, "joe");
        // Errors stay visible until the next submit.
        assert!(!session.report().is_valid());
    }

    #[test]
    fn string_keyed_edits() {
        let mut session = FormSession::new();
        session.field_changed_by_name("password", "Abc123!").unwrap();
        assert_eq!(session.fields().password, "Abc123!");
        assert_eq!(session.password_strength(), Some(PasswordStrength::Strong));

        let err = session.field_changed_by_name("nickname", "x").unwrap_err();
        assert_eq!(err, UnknownField("nickname".to_string()));
        assert_eq!(session.fields().password, "Abc123!");
    }

    #[test]
    fn strength_can_fail_validation() {
        // Strong by the classifier, still rejected for the missing
        // special character.
        let mut session = filled_session();
        session.field_changed(FieldName::Password, "Abcdef1");
        session.field_changed(FieldName::ConfirmPassword, "Abcdef1");
        assert_eq!(session.password_strength(), Some(PasswordStrength::Strong));
        assert_eq!(session.submit(), SubmissionStatus::Error);
        assert_eq!(
            session.report().message_for(FieldName::Password),
            Some(messages::PASSWORD_NO_SPECIAL)
        );
    }
}
