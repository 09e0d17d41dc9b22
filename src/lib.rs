//! # formcheck
//!
//! Composable validation for a four-field signup form: username, email,
//! password, and confirm-password. Field predicates compose into per-field
//! rule chains, a full validation pass produces an ordered field-to-error
//! report, and a [`FormSession`](form::FormSession) carries the mutable
//! state a rendering layer needs (fields, errors, password strength,
//! submission status).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let mut session = FormSession::new();
//! session.field_changed(FieldName::Username, "joe");
//! session.field_changed(FieldName::Email, "joe@x.com");
//! session.field_changed(FieldName::Password, "Abc123!");
//! session.field_changed(FieldName::ConfirmPassword, "Abc123!");
//!
//! assert_eq!(session.submit(), SubmissionStatus::Success);
//! ```
//!
//! ## Validating without a session
//!
//! The rule engine is a pure function and can be called directly:
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let report = validate(&FormFields::default());
//! assert!(!report.is_valid());
//! assert_eq!(report.message_for(FieldName::Username), Some("Username is required"));
//! ```
//!
//! ## Building rules
//!
//! Validators implement [`Validate`](foundation::Validate) and compose
//! with `.and()` / `.or()` / `.not()`; `.with_message()` attaches the
//! user-facing text:
//!
//! ```rust,ignore
//! let rule = not_blank()
//!     .with_message("Password is required")
//!     .and(min_length(6).with_message("Password must be at least 6 characters"));
//! ```

pub mod combinators;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod strength;
pub mod validators;
