//! # rasp-core — Brazilian Input Normalization
//!
//! Pure functions and validated newtypes for the identity and contact
//! numbers collected by the platform's forms: CPF, CNPJ, phone numbers,
//! personal names, e-mail addresses and PIX keys.
//!
//! The form layer hands raw keystroke-level strings to this crate and gets
//! back a display string plus a validity flag. The backend only ever
//! receives the canonical digits produced by [`extract_digits`], so the UI
//! and the API never disagree on the canonical form.
//!
//! ## Key Design Principles
//!
//! 1. **Total core functions.** [`extract_digits`], [`format_segmented`],
//!    [`validate_cpf`] and [`capitalize_name`] are defined for every input
//!    and never fail; invalid input yields `false` or a partial string.
//!
//! 2. **Newtypes for validated values.** [`Cpf`], [`Cnpj`] and [`Phone`]
//!    can only be built through their validating constructors, including
//!    on deserialization, and they store the canonical digits.
//!
//! 3. **Idempotent masks.** Every formatter re-extracts digits, so
//!    formatting its own output is a no-op.
//!
//! ## Crate Policy
//!
//! - No I/O outside [`NormalizerConfig::from_path`].
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

/// Implement `Deserialize` for a validated string newtype by routing the
/// raw string through the type's `new()` constructor, so invalid values
/// are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod cnpj;
pub mod config;
pub mod cpf;
pub mod customer;
pub mod digits;
pub mod document;
pub mod email;
pub mod error;
pub mod name;
pub mod password;
pub mod phone;
pub mod pix;
pub mod template;

// Re-export primary types for ergonomic imports.
pub use cnpj::{cnpj_check_digits, validate_cnpj, Cnpj};
pub use config::NormalizerConfig;
pub use cpf::{cpf_check_digits, validate_cpf, Cpf};
pub use customer::CustomerRecord;
pub use digits::{extract_digits, DigitString};
pub use document::{validate_document, DocumentKind};
pub use email::suggest_email_domains;
pub use error::{ConfigError, DocumentField, ValidationError};
pub use name::{capitalize_name, capitalize_name_with};
pub use password::{PasswordPolicy, PasswordRule};
pub use phone::{normalize_phone, validate_phone, Phone};
pub use pix::PixKeyType;
pub use template::{format_document, format_phone, format_segmented, FormatTemplate, Mask, Segment};
