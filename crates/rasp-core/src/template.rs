//! # Segmented Formatting
//!
//! Display masks for numeric form fields. A [`FormatTemplate`] is a list of
//! digit groups, each followed by a separator, and is applied
//! progressively: while the user is still typing, only the groups that
//! have digits are rendered, and a separator is written only once the next
//! group has started. There is never trailing punctuation after the last
//! digit.
//!
//! | Template | Groups | Example |
//! |----------|--------|---------|
//! | CPF | 3.3.3-2 | `111.444.777-35` |
//! | CNPJ | 2.3.3/4-2 | `12.345.678/9012-34` |
//! | Landline | (2) 4-4 | `(11) 3333-4444` |
//! | Mobile | (2) 5-4 | `(11) 99999-8888` |
//!
//! Formatting re-extracts digits first, so applying a template to its own
//! output yields the same string.

use crate::digits::extract_digits;

/// One group of digits and the separator written after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Number of digits in the group.
    pub len: usize,
    /// Text written between this group and the next one.
    pub separator: &'static str,
}

impl Segment {
    /// A group of `len` digits followed by `separator`.
    pub const fn new(len: usize, separator: &'static str) -> Self {
        Self { len, separator }
    }
}

/// An ordered punctuation template for a fixed-length digit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTemplate {
    name: &'static str,
    open: &'static str,
    segments: &'static [Segment],
}

impl FormatTemplate {
    /// `XXX.XXX.XXX-XX`
    pub const CPF: Self = Self::new(
        "cpf",
        "",
        &[
            Segment { len: 3, separator: "." },
            Segment { len: 3, separator: "." },
            Segment { len: 3, separator: "-" },
            Segment { len: 2, separator: "" },
        ],
    );

    /// `XX.XXX.XXX/XXXX-XX`
    pub const CNPJ: Self = Self::new(
        "cnpj",
        "",
        &[
            Segment { len: 2, separator: "." },
            Segment { len: 3, separator: "." },
            Segment { len: 3, separator: "/" },
            Segment { len: 4, separator: "-" },
            Segment { len: 2, separator: "" },
        ],
    );

    /// `(XX) XXXX-XXXX`
    pub const PHONE_LANDLINE: Self = Self::new(
        "phone-landline",
        "(",
        &[
            Segment { len: 2, separator: ") " },
            Segment { len: 4, separator: "-" },
            Segment { len: 4, separator: "" },
        ],
    );

    /// `(XX) XXXXX-XXXX`
    pub const PHONE_MOBILE: Self = Self::new(
        "phone-mobile",
        "(",
        &[
            Segment { len: 2, separator: ") " },
            Segment { len: 5, separator: "-" },
            Segment { len: 4, separator: "" },
        ],
    );

    /// Build a template. `open` is written before the first group, but only
    /// once the digits spill past that group; a short prefix stays bare.
    pub const fn new(name: &'static str, open: &'static str, segments: &'static [Segment]) -> Self {
        Self {
            name,
            open,
            segments,
        }
    }

    /// Short identifier of the template.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The digit groups, in order.
    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Total digit count: the document's fixed length.
    pub fn total_len(&self) -> usize {
        self.segments.iter().map(|s| s.len).sum()
    }

    /// Apply this template to `input`. See [`format_segmented`].
    pub fn apply(&self, input: &str) -> String {
        format_segmented(input, self)
    }
}

/// Re-insert punctuation into the digits of `input` according to `template`.
///
/// Digits beyond the template's total length are ignored. Empty input
/// yields an empty string.
pub fn format_segmented(input: &str, template: &FormatTemplate) -> String {
    let digits = extract_digits(input).truncated(template.total_len());
    let digits = digits.as_str();

    let first_len = template.segments.first().map_or(0, |s| s.len);
    let mut out = String::with_capacity(digits.len() + 8);
    if digits.len() > first_len {
        out.push_str(template.open);
    }

    let mut pos = 0;
    for segment in template.segments {
        let end = (pos + segment.len).min(digits.len());
        out.push_str(&digits[pos..end]);
        pos = end;
        if pos >= digits.len() {
            break;
        }
        out.push_str(segment.separator);
    }
    out
}

/// Format a Brazilian phone number while it is being typed.
///
/// Up to 11 digits are kept. Two or fewer digits are returned bare; from
/// the third digit on the area code is parenthesized; an 11th digit
/// switches to the mobile layout with a five-digit prefix.
pub fn format_phone(input: &str) -> String {
    let count = extract_digits(input).len();
    let template = if count >= FormatTemplate::PHONE_MOBILE.total_len() {
        &FormatTemplate::PHONE_MOBILE
    } else {
        &FormatTemplate::PHONE_LANDLINE
    };
    format_segmented(input, template)
}

/// Combined CPF-or-CNPJ field: up to 11 digits use the CPF layout, more
/// switch to CNPJ.
pub fn format_document(input: &str) -> String {
    let count = extract_digits(input).len();
    if count <= FormatTemplate::CPF.total_len() {
        format_segmented(input, &FormatTemplate::CPF)
    } else {
        format_segmented(input, &FormatTemplate::CNPJ)
    }
}

/// The input masks used by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mask {
    /// CPF only.
    Cpf,
    /// CNPJ only.
    Cnpj,
    /// Landline or mobile phone.
    Phone,
    /// CPF or CNPJ, chosen by digit count.
    Document,
}

impl Mask {
    /// Format `input` with this mask.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Cpf => format_segmented(input, &FormatTemplate::CPF),
            Self::Cnpj => format_segmented(input, &FormatTemplate::CNPJ),
            Self::Phone => format_phone(input),
            Self::Document => format_document(input),
        }
    }

    /// Largest number of digits the mask accepts.
    pub fn max_digits(self) -> usize {
        match self {
            Self::Cpf => FormatTemplate::CPF.total_len(),
            Self::Cnpj | Self::Document => FormatTemplate::CNPJ.total_len(),
            Self::Phone => FormatTemplate::PHONE_MOBILE.total_len(),
        }
    }
}

impl std::str::FromStr for Mask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "phone" | "telefone" => Ok(Self::Phone),
            "document" | "documento" => Ok(Self::Document),
            other => Err(format!("unknown mask: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_totals() {
        assert_eq!(FormatTemplate::CPF.total_len(), 11);
        assert_eq!(FormatTemplate::CNPJ.total_len(), 14);
        assert_eq!(FormatTemplate::PHONE_LANDLINE.total_len(), 10);
        assert_eq!(FormatTemplate::PHONE_MOBILE.total_len(), 11);
    }

    #[test]
    fn cpf_progressive() {
        let t = FormatTemplate::CPF;
        assert_eq!(t.apply(""), "");
        assert_eq!(t.apply("1"), "1");
        assert_eq!(t.apply("123"), "123");
        assert_eq!(t.apply("1234"), "123.4");
        assert_eq!(t.apply("123456"), "123.456");
        assert_eq!(t.apply("1234567"), "123.456.7");
        assert_eq!(t.apply("123456789"), "123.456.789");
        assert_eq!(t.apply("1234567890"), "123.456.789-0");
        assert_eq!(t.apply("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cpf_truncates_overtyping() {
        assert_eq!(FormatTemplate::CPF.apply("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn cnpj_full_and_overflow() {
        let t = FormatTemplate::CNPJ;
        assert_eq!(t.apply("12345678901234"), "12.345.678/9012-34");
        assert_eq!(t.apply("123456789012345678"), "12.345.678/9012-34");
    }

    #[test]
    fn cnpj_progressive() {
        let t = FormatTemplate::CNPJ;
        assert_eq!(t.apply("12"), "12");
        assert_eq!(t.apply("123"), "12.3");
        assert_eq!(t.apply("12345678"), "12.345.678");
        assert_eq!(t.apply("123456789"), "12.345.678/9");
        assert_eq!(t.apply("1234567890123"), "12.345.678/9012-3");
    }

    #[test]
    fn phone_boundaries() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("113"), "(11) 3");
        assert_eq!(format_phone("113333"), "(11) 3333");
        assert_eq!(format_phone("1133334"), "(11) 3333-4");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn phone_caps_at_eleven_digits() {
        assert_eq!(format_phone("119999988887777"), "(11) 99999-8888");
    }

    #[test]
    fn phone_reformats_its_own_output() {
        let once = format_phone("11 9 9999 8888");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn punctuation_in_input_is_ignored() {
        assert_eq!(FormatTemplate::CPF.apply("111.444.777-35"), "111.444.777-35");
        assert_eq!(FormatTemplate::CPF.apply("abc111def444"), "111.444");
    }

    #[test]
    fn document_switches_layout_on_twelfth_digit() {
        assert_eq!(format_document("11144477735"), "111.444.777-35");
        assert_eq!(format_document("112223330001"), "11.222.333/0001");
        assert_eq!(format_document("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn mask_parse_and_apply() {
        let mask: Mask = "CPF".parse().unwrap();
        assert_eq!(mask, Mask::Cpf);
        assert_eq!(mask.apply("11144477735"), "111.444.777-35");
        assert_eq!("telefone".parse::<Mask>().unwrap(), Mask::Phone);
        assert!("rg".parse::<Mask>().is_err());
    }

    #[test]
    fn mask_max_digits() {
        assert_eq!(Mask::Cpf.max_digits(), 11);
        assert_eq!(Mask::Document.max_digits(), 14);
        assert_eq!(Mask::Phone.max_digits(), 11);
    }
}
