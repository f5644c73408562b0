//! # Error Types
//!
//! The normalization functions themselves are total: they answer `bool` or
//! return a (possibly partial) string, never an error. Errors only appear
//! at the typed edges of the crate:
//!
//! - Validated newtypes ([`crate::Cpf`], [`crate::Cnpj`], [`crate::Phone`])
//!   report *why* a value was rejected through [`ValidationError`].
//! - Configuration loading reports through [`ConfigError`].
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`.

use thiserror::Error;

/// Which kind of document a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    /// Individual taxpayer number.
    Cpf,
    /// Company registry number.
    Cnpj,
    /// Telephone number.
    Phone,
    /// PIX key.
    PixKey,
}

impl std::fmt::Display for DocumentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Phone => "phone",
            Self::PixKey => "PIX key",
        };
        f.write_str(name)
    }
}

/// Rejection reasons for validated document and contact values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not carry the expected number of digits.
    #[error("{field} must have {expected} digits, got {got}")]
    WrongLength {
        /// The field being validated.
        field: DocumentField,
        /// Accepted digit count(s), rendered for the message.
        expected: &'static str,
        /// Number of digits found after extraction.
        got: usize,
    },

    /// Every digit is the same (e.g. `00000000000`).
    #[error("{field} cannot be a repeated single digit")]
    RepeatedDigits {
        /// The field being validated.
        field: DocumentField,
    },

    /// A check digit does not match the computed value.
    #[error("{field} check digit {position} is {found}, expected {expected}")]
    Checksum {
        /// The field being validated.
        field: DocumentField,
        /// 1 for the first check digit, 2 for the second.
        position: u8,
        /// Check digit present in the input.
        found: u8,
        /// Check digit computed from the preceding digits.
        expected: u8,
    },

    /// The value is neither a CPF nor a CNPJ by digit count.
    #[error("document must be a CPF (11 digits) or CNPJ (14 digits), got {0} digits")]
    UnknownDocument(usize),

    /// A PIX key does not match the shape required by its type.
    #[error("invalid PIX key for type {kind}: {reason}")]
    InvalidPixKey {
        /// The PIX key type label.
        kind: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// Errors raised while loading or validating a [`crate::NormalizerConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: String,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The configuration document is not valid YAML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The default area code is not two digits in the range 11-99.
    #[error("default area code must be two digits between 11 and 99, got {0:?}")]
    InvalidAreaCode(String),

    /// A stop word or e-mail domain entry is blank.
    #[error("{list} contains an empty entry at index {index}")]
    EmptyEntry {
        /// Which list contained the blank entry.
        list: &'static str,
        /// Position of the blank entry.
        index: usize,
    },

    /// The password minimum length is zero.
    #[error("password min_length must be at least 1")]
    InvalidPasswordLength,
}
