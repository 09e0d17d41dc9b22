//! Core validation types and traits.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and compose with logical
//! combinators:
//!
//! ```rust,ignore
//! let rule = not_blank().and(min_length(6)).and(contains_special());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
