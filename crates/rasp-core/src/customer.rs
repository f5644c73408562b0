//! # Customer Payload
//!
//! The customer block attached to PIX deposit requests. The form shows
//! punctuated values; the backend and the payment gateway only ever see
//! the canonical form built here: a capitalized name, digit-only phone and
//! document, and an explicit `document_type`.

use serde::Serialize;

use crate::config::NormalizerConfig;
use crate::digits::DigitString;
use crate::document::DocumentKind;
use crate::error::{DocumentField, ValidationError};
use crate::name::capitalize_name_with;
use crate::phone::{normalize_phone, LANDLINE_LEN, MOBILE_LEN};

/// Canonical customer data for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    /// Capitalized full name.
    pub name: String,
    /// Trimmed e-mail address.
    pub email: String,
    /// Phone digits including area code.
    pub phone: DigitString,
    /// CPF or CNPJ digits.
    pub document: DigitString,
    /// Which document `document` holds.
    pub document_type: DocumentKind,
}

impl CustomerRecord {
    /// Build the canonical record from raw form values.
    ///
    /// A 9-digit phone receives `config.default_area_code`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownDocument`] if the document is neither 11
    ///   nor 14 digits.
    /// - [`ValidationError::Checksum`] / [`ValidationError::RepeatedDigits`]
    ///   if the document fails its checksum.
    /// - [`ValidationError::WrongLength`] if the phone is incomplete.
    pub fn normalize(
        name: &str,
        email: &str,
        phone: &str,
        document: &str,
        config: &NormalizerConfig,
    ) -> Result<Self, ValidationError> {
        let document_digits = DigitString::extract(document);
        let document_type = DocumentKind::detect(document)
            .ok_or(ValidationError::UnknownDocument(document_digits.len()))?;
        match document_type {
            DocumentKind::Cpf => {
                crate::Cpf::new(document)?;
            }
            DocumentKind::Cnpj => {
                crate::Cnpj::new(document)?;
            }
        }

        let phone = normalize_phone(phone, &config.default_area_code);
        if !matches!(phone.len(), LANDLINE_LEN | MOBILE_LEN) {
            return Err(ValidationError::WrongLength {
                field: DocumentField::Phone,
                expected: "10 or 11",
                got: phone.len(),
            });
        }

        Ok(Self {
            name: capitalize_name_with(name.trim(), &config.stop_words),
            email: email.trim().to_string(),
            phone,
            document: document_digits,
            document_type,
        })
    }

    /// The record as a JSON value, ready to embed in a request body.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_cpf_customer() {
        let cfg = NormalizerConfig::default();
        let rec = CustomerRecord::normalize(
            "  joão da silva ",
            " joao@gmail.com ",
            "99999-8888",
            "111.444.777-35",
            &cfg,
        )
        .unwrap();
        assert_eq!(rec.name, "João da Silva");
        assert_eq!(rec.email, "joao@gmail.com");
        assert_eq!(rec.phone.as_str(), "11999998888");
        assert_eq!(rec.document.as_str(), "11144477735");
        assert_eq!(rec.document_type, DocumentKind::Cpf);
    }

    #[test]
    fn json_shape() {
        let rec = CustomerRecord::normalize(
            "ACME LTDA",
            "financeiro@acme.com.br",
            "(21) 3333-4444",
            "11.222.333/0001-81",
            &NormalizerConfig::default(),
        )
        .unwrap();
        let json = rec.to_json_value().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Acme Ltda",
                "email": "financeiro@acme.com.br",
                "phone": "2133334444",
                "document": "11222333000181",
                "document_type": "CNPJ"
            })
        );
    }

    #[test]
    fn configured_area_code_used() {
        let cfg = NormalizerConfig {
            default_area_code: "48".to_string(),
            ..NormalizerConfig::default()
        };
        let rec =
            CustomerRecord::normalize("ana", "a@b.com", "988887777", "52998224725", &cfg).unwrap();
        assert_eq!(rec.phone.as_str(), "48988887777");
    }

    #[test]
    fn rejects_bad_documents() {
        let cfg = NormalizerConfig::default();
        assert_eq!(
            CustomerRecord::normalize("a", "a@b.com", "11999998888", "1234", &cfg).unwrap_err(),
            ValidationError::UnknownDocument(4)
        );
        assert!(matches!(
            CustomerRecord::normalize("a", "a@b.com", "11999998888", "11111111111", &cfg),
            Err(ValidationError::RepeatedDigits { .. })
        ));
        assert!(matches!(
            CustomerRecord::normalize("a", "a@b.com", "11999998888", "11222333000180", &cfg),
            Err(ValidationError::Checksum { .. })
        ));
    }

    #[test]
    fn rejects_incomplete_phone() {
        let err = CustomerRecord::normalize(
            "a",
            "a@b.com",
            "3333-4444",
            "11144477735",
            &NormalizerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::WrongLength {
                field: DocumentField::Phone,
                got: 8,
                ..
            }
        ));
    }
}
