//! Validator combinators.
//!
//! Combinators wrap validators to build composite rules:
//!
//! - [`And`]: both must pass (short-circuits, left error wins)
//! - [`Or`]: at least one must pass
//! - [`Not`]: inverts the inner validator
//! - [`WithMessage`]: replaces the error message
//!
//! They are usually reached through [`ValidateExt`](crate::foundation::ValidateExt)
//! rather than constructed directly.

pub mod and;
pub mod message;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
