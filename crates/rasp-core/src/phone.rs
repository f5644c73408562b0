//! # Phone Numbers
//!
//! Brazilian numbers are a two-digit area code (DDD) followed by an
//! 8-digit landline or a 9-digit mobile number, so a complete number has
//! 10 or 11 digits.
//!
//! Payment gateways need the area code. When a user types only the
//! 9-digit mobile number, [`normalize_phone`] prefixes the configured
//! default area code.

use serde::Serialize;

use crate::digits::{extract_digits, DigitString};
use crate::error::{DocumentField, ValidationError};
use crate::template::format_phone;

/// Digits in a landline number with area code.
pub const LANDLINE_LEN: usize = 10;

/// Digits in a mobile number with area code.
pub const MOBILE_LEN: usize = 11;

/// Digits in a mobile number without area code.
const LOCAL_MOBILE_LEN: usize = 9;

/// True when `input` holds a complete landline or mobile number.
///
/// Equivalent to the `(DD) DDDD-DDDD` / `(DD) DDDDD-DDDD` form check used
/// by the registration and login screens.
pub fn validate_phone(input: &str) -> bool {
    matches!(extract_digits(input).len(), LANDLINE_LEN | MOBILE_LEN)
}

/// Digits to submit for `input`, adding `default_area_code` to a bare
/// 9-digit mobile number. Other lengths are returned as extracted.
pub fn normalize_phone(input: &str, default_area_code: &str) -> DigitString {
    let digits = extract_digits(input);
    if digits.len() == LOCAL_MOBILE_LEN {
        digits.prefixed(default_area_code)
    } else {
        digits
    }
}

/// A complete phone number (10 or 11 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(DigitString);

impl_validating_deserialize!(Phone);

impl Phone {
    /// Validate a phone number, formatted or not.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WrongLength`] unless the value has 10 or
    /// 11 digits.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let digits = extract_digits(value.as_ref());
        if !matches!(digits.len(), LANDLINE_LEN | MOBILE_LEN) {
            return Err(ValidationError::WrongLength {
                field: DocumentField::Phone,
                expected: "10 or 11",
                got: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// The canonical digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The two-digit area code.
    pub fn area_code(&self) -> &str {
        &self.0.as_str()[..2]
    }

    /// True for 11-digit (mobile) numbers.
    pub fn is_mobile(&self) -> bool {
        self.0.len() == MOBILE_LEN
    }

    /// `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
    pub fn formatted(&self) -> String {
        format_phone(self.0.as_str())
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
