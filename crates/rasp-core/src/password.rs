//! Sign-up password rules.

use serde::{Deserialize, Serialize};

/// A rule a password failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    /// Fewer characters than the policy minimum.
    TooShort {
        /// Required character count.
        min: usize,
    },
    /// No ASCII digit.
    MissingDigit,
    /// No upper-case letter.
    MissingUppercase,
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
            Self::MissingDigit => f.write_str("must contain a digit"),
            Self::MissingUppercase => f.write_str("must contain an upper-case letter"),
        }
    }
}

/// Password requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Require at least one digit.
    pub require_digit: bool,
    /// Require at least one upper-case letter.
    pub require_uppercase: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_digit: true,
            require_uppercase: true,
        }
    }
}

impl PasswordPolicy {
    /// Every rule `password` breaks, in a stable order. Empty means accepted.
    pub fn check(&self, password: &str) -> Vec<PasswordRule> {
        let mut failed = Vec::new();
        if password.chars().count() < self.min_length {
            failed.push(PasswordRule::TooShort {
                min: self.min_length,
            });
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            failed.push(PasswordRule::MissingDigit);
        }
        if self.require_uppercase && !password.chars().any(char::is_uppercase) {
            failed.push(PasswordRule::MissingUppercase);
        }
        failed
    }

    /// True when `password` satisfies every rule.
    pub fn accepts(&self, password: &str) -> bool {
        self.check(password).is_empty()
    }
}
