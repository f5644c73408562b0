//! # Property Tests
//!
//! Invariants that must hold for every input, not just the fixtures:
//! masks are idempotent and never invent or reorder digits, capitalization
//! is idempotent, and check digits computed by the library always validate.

use proptest::prelude::*;
use rasp_core::{
    capitalize_name, cnpj_check_digits, cpf_check_digits, extract_digits, format_phone,
    format_segmented, validate_cnpj, validate_cpf, FormatTemplate, Mask,
};

fn templates() -> impl Strategy<Value = FormatTemplate> {
    prop_oneof![
        Just(FormatTemplate::CPF),
        Just(FormatTemplate::CNPJ),
        Just(FormatTemplate::PHONE_LANDLINE),
        Just(FormatTemplate::PHONE_MOBILE),
    ]
}

/// Keystroke-like input: mostly digits with the punctuation users paste.
fn form_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,20}",
        "[0-9 .()/-]{0,30}",
        ".{0,30}",
    ]
}

fn digits_to_string(values: &[u8]) -> String {
    values.iter().map(|d| char::from(b'0' + d)).collect()
}

proptest! {
    #[test]
    fn segmented_format_is_idempotent(input in form_input(), template in templates()) {
        let once = format_segmented(&input, &template);
        prop_assert_eq!(format_segmented(&once, &template), once);
    }

    #[test]
    fn segmented_format_preserves_digits(input in form_input(), template in templates()) {
        let formatted = format_segmented(&input, &template);
        let expected = extract_digits(&input).truncated(template.total_len());
        prop_assert_eq!(extract_digits(&formatted), expected);
    }

    #[test]
    fn segmented_format_never_ends_with_punctuation(input in form_input(), template in templates()) {
        let formatted = format_segmented(&input, &template);
        if let Some(last) = formatted.chars().last() {
            prop_assert!(last.is_ascii_digit(), "trailing {:?} in {:?}", last, formatted);
        }
    }

    #[test]
    fn phone_format_is_idempotent_and_preserving(input in form_input()) {
        let once = format_phone(&input);
        prop_assert_eq!(format_phone(&once), once.clone());
        prop_assert_eq!(extract_digits(&once), extract_digits(&input).truncated(11));
    }

    #[test]
    fn masks_are_idempotent(input in form_input()) {
        for mask in [Mask::Cpf, Mask::Cnpj, Mask::Phone, Mask::Document] {
            let once = mask.apply(&input);
            prop_assert_eq!(mask.apply(&once), once);
        }
    }

    #[test]
    fn capitalize_is_idempotent(input in "[a-zA-ZáéíóúâêôãõçÁÉÍÓÚÂÊÔÃÕÇ' -]{0,40}") {
        let once = capitalize_name(&input);
        prop_assert_eq!(capitalize_name(&once), once);
    }

    #[test]
    fn generated_cpfs_validate(base in prop::array::uniform9(0u8..10)) {
        let [first, second] = cpf_check_digits(&base);
        let mut all = base.to_vec();
        all.extend([first, second]);
        let cpf = digits_to_string(&all);
        let repeated = all.iter().all(|d| *d == all[0]);
        prop_assert_eq!(validate_cpf(&cpf), !repeated);
        let formatted = format_segmented(&cpf, &FormatTemplate::CPF);
        prop_assert_eq!(validate_cpf(&formatted), !repeated);
    }

    #[test]
    fn wrong_last_cpf_digit_fails(base in prop::array::uniform9(0u8..10), bump in 1u8..10) {
        let [first, second] = cpf_check_digits(&base);
        let mut all = base.to_vec();
        all.extend([first, (second + bump) % 10]);
        prop_assert!(!validate_cpf(&digits_to_string(&all)));
    }

    #[test]
    fn generated_cnpjs_validate(base in prop::array::uniform12(0u8..10)) {
        let [first, second] = cnpj_check_digits(&base);
        let mut all = base.to_vec();
        all.extend([first, second]);
        let cnpj = digits_to_string(&all);
        let repeated = all.iter().all(|d| *d == all[0]);
        prop_assert_eq!(validate_cnpj(&cnpj), !repeated);
    }

    #[test]
    fn validators_are_total(input in ".{0,40}") {
        // Must not panic on arbitrary text.
        let _ = validate_cpf(&input);
        let _ = validate_cnpj(&input);
    }
}
