//! # CNPJ — Cadastro Nacional da Pessoa Jurídica
//!
//! The company registry number: 12 base digits (8 root + 4 branch) and 2
//! check digits. Unlike the CPF, each check digit uses its own weight
//! table and the reduction is `11 - (sum mod 11)`, with remainders 0 and 1
//! mapping to 0.

use serde::Serialize;

use crate::digits::{extract_digits, DigitString};
use crate::error::{DocumentField, ValidationError};
use crate::template::FormatTemplate;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Compute both check digits for a 12-digit CNPJ base.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

fn check(digits: &DigitString) -> Result<(), ValidationError> {
    if digits.len() != CNPJ_LEN {
        return Err(ValidationError::WrongLength {
            field: DocumentField::Cnpj,
            expected: "14",
            got: digits.len(),
        });
    }
    if digits.all_same() {
        return Err(ValidationError::RepeatedDigits {
            field: DocumentField::Cnpj,
        });
    }

    let values = digits.values();
    let mut base = [0u8; 12];
    base.copy_from_slice(&values[..12]);
    let expected = cnpj_check_digits(&base);

    for (idx, (&found, &want)) in values[12..].iter().zip(expected.iter()).enumerate() {
        if found != want {
            return Err(ValidationError::Checksum {
                field: DocumentField::Cnpj,
                position: idx as u8 + 1,
                found,
                expected: want,
            });
        }
    }
    Ok(())
}

/// True when `input` holds a valid CNPJ. Punctuation is ignored.
pub fn validate_cnpj(input: &str) -> bool {
    check(&extract_digits(input)).is_ok()
}

/// A CNPJ that passed length, repetition and checksum validation.
///
/// Stored and serialized as 14 digits; `Display` renders
/// `XX.XXX.XXX/XXXX-XX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cnpj(DigitString);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Validate a CNPJ, formatted or not.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongLength`],
    /// [`ValidationError::RepeatedDigits`] or [`ValidationError::Checksum`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let digits = extract_digits(value.as_ref());
        if let Err(e) = check(&digits) {
            tracing::debug!(error = %e, "CNPJ rejected");
            return Err(e);
        }
        Ok(Self(digits))
    }

    /// The 14 canonical digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The 8-digit company root shared by all branches.
    pub fn root(&self) -> &str {
        &self.0.as_str()[..8]
    }

    /// The 4-digit branch number (`0001` is the head office).
    pub fn branch(&self) -> &str {
        &self.0.as_str()[8..12]
    }

    /// `XX.XXX.XXX/XXXX-XX`
    pub fn formatted(&self) -> String {
        FormatTemplate::CNPJ.apply(self.0.as_str())
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
