use number_parse::locale::{
    get_locale_settings, get_locale_settings_by_code, list_available_locales,
};
use number_parse::{parse_integer, parse_number};

#[test]
fn test_registry_has_locales() {
    let locales = list_available_locales();
    assert!(locales.len() >= 20, "expected the embedded locale set");
    assert!(locales.iter().any(|l| l == "en_US"));
    assert!(locales.iter().any(|l| l == "fr_FR"));
}

#[test]
fn test_parse_with_english_locale() {
    let locale = get_locale_settings("en_US").unwrap();
    assert_eq!(parse_number("1,234,567.89", &locale), Ok(1234567.89));
}

#[test]
fn test_parse_with_german_locale() {
    let locale = get_locale_settings("de_DE").unwrap();
    assert_eq!(parse_number("1.234.567,89", &locale), Ok(1234567.89));
    assert_eq!(parse_integer("1.234.567", &locale), Ok(1234567));
}

#[test]
fn test_parse_with_french_locale() {
    // French groups with the no-break space
    let locale = get_locale_settings("fr_FR").unwrap();
    assert_eq!(locale.thousands_separator, '\u{00A0}');
    assert_eq!(
        parse_number("1\u{00A0}234\u{00A0}567,89", &locale),
        Ok(1234567.89)
    );
}

#[test]
fn test_parse_with_swiss_locale() {
    let locale = get_locale_settings("de_CH").unwrap();
    assert_eq!(parse_number("12\u{2019}345.67", &locale), Ok(12345.67));
}

#[test]
fn test_lookup_by_windows_code() {
    let en_us = get_locale_settings_by_code(0x0409).unwrap();
    assert_eq!(en_us, get_locale_settings("en_US").unwrap());

    let fr_fr = get_locale_settings_by_code(0x040C).unwrap();
    assert_eq!(fr_fr, get_locale_settings("fr_FR").unwrap());

    assert!(get_locale_settings_by_code(0x0000).is_none());
}

#[test]
fn test_unknown_locale_identifier() {
    assert!(get_locale_settings("tlh_QO").is_none());
}
