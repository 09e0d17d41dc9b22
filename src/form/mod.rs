//! The signup form: data model, rule set, and session.
//!
//! Data flows one way: raw field values go through [`rules::validate`]
//! into a [`ValidationReport`], and the rendering layer reads the
//! resulting snapshots off the [`FormSession`]. Validation is a pure
//! recomputation over all four fields on every pass.

pub mod fields;
pub mod report;
pub mod rules;
pub mod session;

pub use fields::{FieldName, FormFields, UnknownField};
pub use report::ValidationReport;
pub use rules::{MIN_PASSWORD_LENGTH, messages, validate};
pub use session::{FormSession, SubmissionStatus};
