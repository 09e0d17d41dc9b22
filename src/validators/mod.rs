//! Built-in validators.
//!
//! The concrete predicates the form rules are assembled from:
//!
//! - **Presence/length**: [`NotBlank`], [`MinLength`]
//! - **Content**: [`EmailShape`]
//! - **Password**: [`ContainsSpecial`]
//! - **Equality**: [`Equals`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let password = not_blank().and(min_length(6)).and(contains_special());
//! assert!(password.validate("abc@12").is_ok());
//! ```

pub mod content;
pub mod equality;
pub mod length;
pub mod password;

pub use content::{EmailShape, email_shape};
pub use equality::{Equals, equals};
pub use length::{MinLength, NotBlank, min_length, not_blank};
pub use password::{ContainsSpecial, SPECIAL_CHARS, contains_special};
