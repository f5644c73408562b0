//! # CPF — Cadastro de Pessoas Físicas
//!
//! The individual taxpayer number: 9 base digits followed by 2 check
//! digits. The check-digit algorithm is fixed by the Receita Federal:
//!
//! 1. First check digit: `Σ d[i] * (10 - i)` over the 9 base digits,
//!    then `(sum * 10) mod 11`, with 10 mapped to 0.
//! 2. Second check digit: `Σ d[i] * (11 - i)` over the first 10 digits
//!    (base plus first check digit), reduced the same way.
//!
//! Sequences of a single repeated digit (`000.000.000-00`,
//! `111.111.111-11`, ...) satisfy the arithmetic but are not issued, so
//! they are rejected explicitly.

use serde::Serialize;

use crate::digits::{extract_digits, DigitString};
use crate::error::{DocumentField, ValidationError};
use crate::template::FormatTemplate;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Reduce a weighted sum to a CPF check digit.
fn reduce(sum: u32) -> u8 {
    match (sum * 10) % 11 {
        10 => 0,
        // Always < 10 here.
        r => r as u8,
    }
}

/// Compute both check digits for a 9-digit CPF base.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = reduce(
        base.iter()
            .enumerate()
            .map(|(i, &d)| u32::from(d) * (10 - i as u32))
            .sum(),
    );
    let second = reduce(
        base.iter()
            .chain(std::iter::once(&first))
            .enumerate()
            .map(|(i, &d)| u32::from(d) * (11 - i as u32))
            .sum(),
    );
    [first, second]
}

/// Run every CPF rule against already-extracted digits.
fn check(digits: &DigitString) -> Result<(), ValidationError> {
    if digits.len() != CPF_LEN {
        return Err(ValidationError::WrongLength {
            field: DocumentField::Cpf,
            expected: "11",
            got: digits.len(),
        });
    }
    if digits.all_same() {
        return Err(ValidationError::RepeatedDigits {
            field: DocumentField::Cpf,
        });
    }

    let values = digits.values();
    let mut base = [0u8; 9];
    base.copy_from_slice(&values[..9]);
    let expected = cpf_check_digits(&base);

    for (idx, (&found, &want)) in values[9..].iter().zip(expected.iter()).enumerate() {
        if found != want {
            return Err(ValidationError::Checksum {
                field: DocumentField::Cpf,
                position: idx as u8 + 1,
                found,
                expected: want,
            });
        }
    }
    Ok(())
}

/// True when `input` holds a valid CPF.
///
/// Punctuation and any other non-digit characters are ignored, so both
/// `"11144477735"` and `"111.444.777-35"` are accepted.
pub fn validate_cpf(input: &str) -> bool {
    check(&extract_digits(input)).is_ok()
}

/// A CPF that passed length, repetition and checksum validation.
///
/// Stored as 11 digits without punctuation, which is also the serialized
/// form sent to the backend. `Display` renders `XXX.XXX.XXX-XX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(DigitString);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Validate a CPF, formatted or not.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongLength`],
    /// [`ValidationError::RepeatedDigits`] or [`ValidationError::Checksum`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let digits = extract_digits(value.as_ref());
        if let Err(e) = check(&digits) {
            tracing::debug!(error = %e, "CPF rejected");
            return Err(e);
        }
        Ok(Self(digits))
    }

    /// The 11 canonical digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The digits as a [`DigitString`].
    pub fn digits(&self) -> &DigitString {
        &self.0
    }

    /// `XXX.XXX.XXX-XX`
    pub fn formatted(&self) -> String {
        FormatTemplate::CPF.apply(self.0.as_str())
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
