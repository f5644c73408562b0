//! # Document Kind
//!
//! Payment gateways take a single `document` field and a `document_type`
//! discriminator. The kind is inferred from the digit count: 11 is a CPF,
//! 14 is a CNPJ, anything else is not a document.

use serde::{Deserialize, Serialize};

use crate::cnpj::{validate_cnpj, CNPJ_LEN};
use crate::cpf::{validate_cpf, CPF_LEN};
use crate::digits::extract_digits;
use crate::template::FormatTemplate;

/// CPF or CNPJ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Company registry number, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Infer the kind from the digit count of `input`.
    pub fn detect(input: &str) -> Option<Self> {
        match extract_digits(input).len() {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Run the checksum for this kind.
    pub fn validate(self, input: &str) -> bool {
        match self {
            Self::Cpf => validate_cpf(input),
            Self::Cnpj => validate_cnpj(input),
        }
    }

    /// Display template for this kind.
    pub fn template(self) -> &'static FormatTemplate {
        match self {
            Self::Cpf => &FormatTemplate::CPF,
            Self::Cnpj => &FormatTemplate::CNPJ,
        }
    }

    /// Wire name: `CPF` or `CNPJ`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `input` is a valid CPF or a valid CNPJ.
pub fn validate_document(input: &str) -> bool {
    DocumentKind::detect(input).is_some_and(|kind| kind.validate(input))
}
