//! # Validate Subcommand
//!
//! Checksum and shape validation for CPF, CNPJ, phone, generic document
//! and PIX key values. The process exits with status 1 when the value is
//! rejected, so scripts can filter exported rows.

use std::io::Write;

use anyhow::bail;
use clap::{Args, ValueEnum};
use rasp_core::{Cnpj, Cpf, DocumentKind, Phone, PixKeyType, ValidationError};
use serde::Serialize;

use crate::output::emit;

/// What kind of value to validate.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Individual taxpayer number.
    Cpf,
    /// Company registry number.
    Cnpj,
    /// Landline or mobile phone with area code.
    Phone,
    /// CPF or CNPJ, detected by digit count.
    Document,
    /// PIX key; requires `--pix-type`.
    Pix,
}

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Kind of value.
    #[arg(value_enum)]
    pub kind: ValueKind,

    /// The value as typed or exported.
    pub input: String,

    /// PIX key type (cpf, cnpj, email, phone, random) for `pix`.
    #[arg(long)]
    pub pix_type: Option<PixKeyType>,
}

#[derive(Debug, Serialize)]
struct ValidateReport<'a> {
    kind: ValueKind,
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Canonical value and display form, or the rejection reason.
fn check(args: &ValidateArgs) -> anyhow::Result<Result<(String, String), ValidationError>> {
    let input = args.input.as_str();
    let outcome = match args.kind {
        ValueKind::Cpf => Cpf::new(input).map(|v| (v.as_str().to_string(), v.formatted())),
        ValueKind::Cnpj => Cnpj::new(input).map(|v| (v.as_str().to_string(), v.formatted())),
        ValueKind::Phone => Phone::new(input).map(|v| (v.as_str().to_string(), v.formatted())),
        ValueKind::Document => match DocumentKind::detect(input) {
            Some(DocumentKind::Cpf) => {
                Cpf::new(input).map(|v| (v.as_str().to_string(), v.formatted()))
            }
            Some(DocumentKind::Cnpj) => {
                Cnpj::new(input).map(|v| (v.as_str().to_string(), v.formatted()))
            }
            None => Err(ValidationError::UnknownDocument(
                rasp_core::extract_digits(input).len(),
            )),
        },
        ValueKind::Pix => {
            let Some(key_type) = args.pix_type else {
                bail!("--pix-type is required when validating a PIX key");
            };
            key_type
                .canonical(input)
                .map(|canonical| (canonical, key_type.format_input(input)))
        }
    };
    Ok(outcome)
}

/// Validate `args.input` and report. Returns whether the value is valid.
pub fn run(args: &ValidateArgs, json: bool, out: &mut impl Write) -> anyhow::Result<bool> {
    let outcome = check(args)?;
    let valid = outcome.is_ok();
    let report = match outcome {
        Ok((canonical, formatted)) => ValidateReport {
            kind: args.kind,
            input: &args.input,
            valid,
            canonical: Some(canonical),
            formatted: Some(formatted),
            error: None,
        },
        Err(err) => {
            tracing::info!(kind = ?args.kind, error = %err, "value rejected");
            ValidateReport {
                kind: args.kind,
                input: &args.input,
                valid,
                canonical: None,
                formatted: None,
                error: Some(err.to_string()),
            }
        }
    };
    emit(out, json, &report, |r| match (&r.formatted, &r.error) {
        (Some(formatted), _) => vec![format!("valid: {formatted}")],
        (_, Some(error)) => vec![format!("invalid: {error}")],
        _ => vec!["invalid".to_string()],
    })?;
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: ValueKind, input: &str, pix_type: Option<PixKeyType>) -> ValidateArgs {
        ValidateArgs {
            kind,
            input: input.to_string(),
            pix_type,
        }
    }

    fn render(args: &ValidateArgs) -> (bool, String) {
        let mut buf = Vec::new();
        let valid = run(args, false, &mut buf).unwrap();
        (valid, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn valid_cpf() {
        let (valid, text) = render(&args(ValueKind::Cpf, "11144477735", None));
        assert!(valid);
        assert_eq!(text, "valid: 111.444.777-35\n");
    }

    #[test]
    fn invalid_cpf_reports_check_digit() {
        let (valid, text) = render(&args(ValueKind::Cpf, "12345678900", None));
        assert!(!valid);
        assert!(text.starts_with("invalid: CPF check digit 2"), "{text}");
    }

    #[test]
    fn document_detects_cnpj() {
        let (valid, text) = render(&args(ValueKind::Document, "11.222.333/0001-81", None));
        assert!(valid);
        assert_eq!(text, "valid: 11.222.333/0001-81\n");
    }

    #[test]
    fn document_with_wrong_length() {
        let (valid, text) = render(&args(ValueKind::Document, "123", None));
        assert!(!valid);
        assert!(text.contains("got 3 digits"), "{text}");
    }

    #[test]
    fn phone_validation() {
        assert!(render(&args(ValueKind::Phone, "(11) 99999-8888", None)).0);
        assert!(!render(&args(ValueKind::Phone, "999998888", None)).0);
    }

    #[test]
    fn pix_requires_type() {
        let mut buf = Vec::new();
        assert!(run(&args(ValueKind::Pix, "x@y.com", None), false, &mut buf).is_err());
    }

    #[test]
    fn pix_email_json() {
        let mut buf = Vec::new();
        let valid = run(
            &args(ValueKind::Pix, " Maria@Exemplo.com.br ", Some(PixKeyType::Email)),
            true,
            &mut buf,
        )
        .unwrap();
        assert!(valid);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["kind"], "pix");
        assert_eq!(value["canonical"], "maria@exemplo.com.br");
        assert!(value.get("error").is_none());
    }
}
