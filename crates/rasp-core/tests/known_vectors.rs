//! Fixed input/output pairs shared with the web client. If one of these
//! changes, the form and the backend will disagree on a value.

use rasp_core::{
    capitalize_name, extract_digits, format_phone, format_segmented, validate_cpf, Cpf,
    FormatTemplate,
};

#[test]
fn cpf_validator_vectors() {
    let cases = [
        ("11144477735", true),
        ("11111111111", false),
        ("12345678900", false),
        ("111.444.777-35", true),
        ("123", false),
        ("", false),
        ("000.000.000-00", false),
        ("529.982.247-25", true),
        ("529.982.247-24", false),
    ];
    for (input, expected) in cases {
        assert_eq!(validate_cpf(input), expected, "validate_cpf({input:?})");
    }
}

#[test]
fn cnpj_formatter_vectors() {
    assert_eq!(
        format_segmented("12345678901234", &FormatTemplate::CNPJ),
        "12.345.678/9012-34"
    );
    assert_eq!(
        format_segmented("1234567890123456789", &FormatTemplate::CNPJ),
        "12.345.678/9012-34"
    );
}

#[test]
fn phone_formatter_vectors() {
    assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
    assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
}

#[test]
fn name_vectors() {
    assert_eq!(capitalize_name("joão da silva e souza"), "João da Silva e Souza");
    assert_eq!(capitalize_name("de souza"), "De Souza");
}

#[test]
fn backend_receives_digits_only() {
    let typed = "111.444.777-35";
    let cpf = Cpf::new(typed).unwrap();
    assert_eq!(cpf.as_str(), extract_digits(typed).as_str());
    assert_eq!(serde_json::to_value(&cpf).unwrap(), serde_json::json!("11144477735"));
}
