//! Password strength classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse strength grade shown next to the password field while the user
/// types.
///
/// Classification is advisory and deliberately looser than the submit-time
/// password rules: it does not look at special characters, so a password
/// can grade [`Strong`](PasswordStrength::Strong) and still be rejected on
/// submit for lacking one. Keep the two in sync only as an explicit
/// product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Fewer than 6 characters.
    Weak,
    /// At least 6 characters, but missing a lowercase letter, an uppercase
    /// letter, or a digit.
    Medium,
    /// At least 6 characters with lowercase, uppercase, and a digit.
    Strong,
}

impl PasswordStrength {
    /// Grades a password.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(PasswordStrength::classify("ab"), PasswordStrength::Weak);
    /// assert_eq!(PasswordStrength::classify("abcdef"), PasswordStrength::Medium);
    /// assert_eq!(PasswordStrength::classify("Abcdef1"), PasswordStrength::Strong);
    /// ```
    #[must_use]
    pub fn classify(password: &str) -> Self {
        if password.chars().count() < 6 {
            return Self::Weak;
        }
        let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if has_lowercase && has_uppercase && has_digit {
            Self::Strong
        } else {
            Self::Medium
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        };
        f.write_str(label)
    }
}
