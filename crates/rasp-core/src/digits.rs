//! # Digit Extraction
//!
//! [`DigitString`] is the canonical form every document and phone number is
//! reduced to before it is formatted, validated or submitted. The backend
//! only ever receives this form, so extraction must be exact: keep ASCII
//! `0`-`9` in order, drop everything else (letters, punctuation,
//! whitespace, and non-ASCII digits such as `٣`).

use serde::Serialize;

/// A string containing only ASCII digits.
///
/// The inner field is private; the only constructor is
/// [`extract_digits`] (or [`DigitString::extract`]), so the invariant holds
/// by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DigitString(String);

impl DigitString {
    /// Keep the ASCII digits of `input`, in order.
    pub fn extract(input: &str) -> Self {
        Self(input.chars().filter(char::is_ascii_digit).collect())
    }

    /// The digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no digit was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `max` digits (or all of them when shorter).
    pub fn truncated(&self, max: usize) -> Self {
        // ASCII only, so byte and char indices agree.
        Self(self.0[..self.0.len().min(max)].to_string())
    }

    /// Numeric value of each digit.
    pub fn values(&self) -> Vec<u8> {
        self.0.bytes().map(|b| b - b'0').collect()
    }

    /// True when there is at least one digit and every digit is identical.
    pub fn all_same(&self) -> bool {
        let mut bytes = self.0.bytes();
        match bytes.next() {
            Some(first) => bytes.all(|b| b == first),
            None => false,
        }
    }

    /// Prepend `prefix` digits. Non-digit characters in `prefix` are dropped.
    pub(crate) fn prefixed(&self, prefix: &str) -> Self {
        let mut out = Self::extract(prefix).0;
        out.push_str(&self.0);
        Self(out)
    }

    /// Consume into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip every character of `input` that is not an ASCII digit.
///
/// Total: defined for every string, including empty and non-ASCII input.
pub fn extract_digits(input: &str) -> DigitString {
    DigitString::extract(input)
}
