//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let mut session = FormSession::new();
//! session.field_changed(FieldName::Username, "joe");
//! let status = session.submit();
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

pub use crate::validators::{
    ContainsSpecial, EmailShape, Equals, MinLength, NotBlank, SPECIAL_CHARS, contains_special,
    email_shape, equals, min_length, not_blank,
};

pub use crate::combinators::{
    And, Not, Or, WithMessage, and, not, or, with_message,
};

pub use crate::form::{
    FieldName, FormFields, FormSession, MIN_PASSWORD_LENGTH, SubmissionStatus, UnknownField,
    ValidationReport, messages, validate,
};

pub use crate::strength::PasswordStrength;
