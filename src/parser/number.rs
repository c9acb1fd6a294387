use winnow::Parser;

use crate::parser::combinators::parse_signed_literal;
use crate::parser::tokens::{parse_digit_run, parse_sign};
use crate::types::{LocaleSettings, NumberParseError, NumericLiteral};

/// Parse a locale-formatted numeric string into an `f64`
///
/// This is the main public API entry point of this module. The input may
/// contain the locale's group separator in any position; every occurrence is
/// removed from a local copy before the number itself is parsed under the
/// locale's decimal-point convention. The caller's string is never modified.
///
/// Group separators are not validated against canonical grouping positions:
/// "1,234.56", "12,34.56" and "1,2,3,4.56" all parse to the same values their
/// separator-free renditions would.
///
/// # Arguments
/// * `input` - The numeric string to parse
/// * `locale` - The separator convention to parse under
///
/// # Returns
/// * `Result<f64, NumberParseError>` - The parsed value, or why the input was
///   rejected
///
/// # Examples
/// ```
/// use number_parse::parse_number;
/// use number_parse::types::LocaleSettings;
///
/// let locale = LocaleSettings::default();
/// assert_eq!(parse_number("1,234,567.89", &locale), Ok(1234567.89));
///
/// let german = LocaleSettings::default()
///     .with_decimal_point(',')
///     .with_thousands_separator('.');
/// assert_eq!(parse_number("1.234.567,89", &german), Ok(1234567.89));
/// ```
pub fn parse_number(input: &str, locale: &LocaleSettings) -> Result<f64, NumberParseError> {
    let stripped = input.replace(locale.thousands_separator, "");
    parse_plain_number(&stripped, locale)
}

/// Parse a numeric string that carries no group separators
///
/// This is the underlying parser `parse_number` delegates to after stripping.
/// ASCII whitespace around the number is ignored; everything between must be
/// a single number under the locale's decimal-point convention: an optional
/// sign, digits with an optional decimal point, an optional exponent, or one
/// of the special forms "inf", "infinity" and "nan" (case-insensitive).
///
/// A group separator anywhere in the input makes it fail here, as does any
/// trailing character after the number.
pub fn parse_plain_number(input: &str, locale: &LocaleSettings) -> Result<f64, NumberParseError> {
    let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(NumberParseError::Empty);
    }

    let mut remaining = trimmed;
    let (negative, literal) = parse_signed_literal(locale.decimal_point)
        .parse_next(&mut remaining)
        .map_err(|_| NumberParseError::Invalid(trimmed.to_string()))?;

    if !remaining.is_empty() {
        return Err(NumberParseError::Invalid(trimmed.to_string()));
    }

    literal_to_value(negative, &literal)
}

/// Parse a locale-formatted integer string into an `i64`
///
/// Group separators are stripped the same way `parse_number` strips them;
/// the remainder must be an optionally signed run of digits. Values outside
/// the `i64` range are rejected with `NumberParseError::OutOfRange`.
///
/// # Examples
/// ```
/// use number_parse::parse_integer;
/// use number_parse::types::LocaleSettings;
///
/// let locale = LocaleSettings::default();
/// assert_eq!(parse_integer("1,234,567", &locale), Ok(1234567));
/// ```
pub fn parse_integer(input: &str, locale: &LocaleSettings) -> Result<i64, NumberParseError> {
    let stripped = input.replace(locale.thousands_separator, "");
    let trimmed = stripped.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(NumberParseError::Empty);
    }

    let mut remaining = trimmed;
    let (negative, digits) = (parse_sign, parse_digit_run)
        .parse_next(&mut remaining)
        .map_err(|_| NumberParseError::Invalid(trimmed.to_string()))?;

    if !remaining.is_empty() {
        return Err(NumberParseError::Invalid(trimmed.to_string()));
    }

    let mut signed = String::with_capacity(digits.len() + 1);
    if negative {
        signed.push('-');
    }
    signed.push_str(digits);
    signed
        .parse::<i64>()
        .map_err(|_| NumberParseError::OutOfRange(trimmed.to_string()))
}

/// Convert a recognized literal into its `f64` value
///
/// Finite literals go through a normalized ASCII rendition ('.' decimal
/// point, 'e' exponent marker) handed to the standard float parser, so
/// overflow saturates to infinity and underflow to zero.
fn literal_to_value(negative: bool, literal: &NumericLiteral) -> Result<f64, NumberParseError> {
    let value = match literal {
        NumericLiteral::Infinity => f64::INFINITY,
        NumericLiteral::NaN => f64::NAN,
        NumericLiteral::Finite {
            integer,
            fraction,
            exponent,
        } => {
            let mut normalized = String::new();
            normalized.push_str(if integer.is_empty() { "0" } else { integer });
            if let Some(digits) = fraction {
                if !digits.is_empty() {
                    normalized.push('.');
                    normalized.push_str(digits);
                }
            }
            if let Some(exp) = exponent {
                normalized.push('e');
                if exp.negative {
                    normalized.push('-');
                }
                normalized.push_str(exp.digits);
            }
            normalized
                .parse::<f64>()
                .map_err(|_| NumberParseError::Invalid(normalized.clone()))?
        }
    };

    Ok(if negative { -value } else { value })
}
