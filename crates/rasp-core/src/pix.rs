//! # PIX Keys
//!
//! Withdrawals are paid to a PIX key. The key type decides how keystrokes
//! are masked in the form, what the backend receives, and how the key is
//! validated:
//!
//! | Type | Display | Submitted | Valid when |
//! |------|---------|-----------|------------|
//! | CPF | `XXX.XXX.XXX-XX` | 11 digits | CPF checksum |
//! | CNPJ | `XX.XXX.XXX/XXXX-XX` | 14 digits | CNPJ checksum |
//! | Phone | `(DD) DDDDD-DDDD` | 10/11 digits | 10 or 11 digits |
//! | E-mail | as typed | trimmed, lower-case | `local@domain.tld` |
//! | Random | as typed | lower-case UUID | parses as a UUID |

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cnpj::validate_cnpj;
use crate::cpf::validate_cpf;
use crate::digits::extract_digits;
use crate::error::ValidationError;
use crate::phone::validate_phone;
use crate::template::{format_phone, FormatTemplate};

/// The kinds of PIX key a withdrawal can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixKeyType {
    /// Individual taxpayer number.
    Cpf,
    /// Company registry number.
    Cnpj,
    /// E-mail address.
    Email,
    /// Phone number.
    Phone,
    /// Random key (EVP), a UUID issued by the bank.
    Random,
}

impl PixKeyType {
    /// All key types, in the order the withdrawal form lists them.
    pub fn all() -> &'static [PixKeyType] {
        &[Self::Cpf, Self::Cnpj, Self::Email, Self::Phone, Self::Random]
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Email => "E-mail",
            Self::Phone => "Telefone",
            Self::Random => "Chave Aleatória",
        }
    }

    /// Mask a value as it is being typed.
    pub fn format_input(self, raw: &str) -> String {
        match self {
            Self::Cpf => FormatTemplate::CPF.apply(raw),
            Self::Cnpj => FormatTemplate::CNPJ.apply(raw),
            Self::Phone => format_phone(raw),
            Self::Email | Self::Random => raw.trim().to_string(),
        }
    }

    /// The value to submit for `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPixKey`] when `raw` is not a valid
    /// key of this type.
    pub fn canonical(self, raw: &str) -> Result<String, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidPixKey {
            kind: self.label(),
            reason: reason.to_string(),
        };
        match self {
            Self::Cpf if validate_cpf(raw) => Ok(extract_digits(raw).into_string()),
            Self::Cpf => Err(invalid("CPF check digits do not match")),
            Self::Cnpj if validate_cnpj(raw) => Ok(extract_digits(raw).into_string()),
            Self::Cnpj => Err(invalid("CNPJ check digits do not match")),
            Self::Phone if validate_phone(raw) => Ok(extract_digits(raw).into_string()),
            Self::Phone => Err(invalid("phone must have 10 or 11 digits")),
            Self::Email => {
                let email = raw.trim().to_lowercase();
                if is_email_shaped(&email) {
                    Ok(email)
                } else {
                    Err(invalid("not an e-mail address"))
                }
            }
            Self::Random => Uuid::parse_str(raw.trim())
                .map(|id| id.hyphenated().to_string())
                .map_err(|e| invalid(&e.to_string())),
        }
    }

    /// True when `raw` is a valid key of this type.
    pub fn is_valid(self, raw: &str) -> bool {
        self.canonical(raw).is_ok()
    }
}

impl std::fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PixKeyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "email" | "e-mail" => Ok(Self::Email),
            "phone" | "telefone" => Ok(Self::Phone),
            "random" | "evp" | "aleatoria" => Ok(Self::Random),
            other => Err(format!("unknown PIX key type: {other}")),
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
