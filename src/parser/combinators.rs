use winnow::combinator::{alt, opt, preceded};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Parse an exponent suffix: the marker, an optional sign and the digits
pub fn parse_exponent<'s>(input: &mut &'s str) -> ModalResult<Exponent<'s>> {
    preceded(parse_exponent_marker, (parse_sign, parse_digit_run))
        .map(|(negative, digits)| Exponent { negative, digits })
        .parse_next(input)
}

/// Parse the digits of a finite number under the given decimal-point convention
///
/// Accepts "123", "123.45", "123." and ".45" shapes (with the locale's
/// decimal-point character in place of '.'), each with an optional exponent.
pub fn parse_finite_literal<'s>(
    decimal_point: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<NumericLiteral<'s>> {
    move |input: &mut &'s str| {
        let leading_digits = (
            parse_digit_run,
            opt(preceded(
                parse_decimal_point(decimal_point),
                opt(parse_digit_run),
            )),
            opt(parse_exponent),
        )
            .map(|(integer, fraction, exponent)| NumericLiteral::Finite {
                integer,
                fraction: fraction.map(|digits| digits.unwrap_or("")),
                exponent,
            });

        let leading_point = (
            preceded(parse_decimal_point(decimal_point), parse_digit_run),
            opt(parse_exponent),
        )
            .map(|(fraction, exponent)| NumericLiteral::Finite {
                integer: "",
                fraction: Some(fraction),
                exponent,
            });

        alt((leading_digits, leading_point)).parse_next(input)
    }
}

/// Parse a complete signed numeric literal
pub fn parse_signed_literal<'s>(
    decimal_point: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<(bool, NumericLiteral<'s>)> {
    move |input: &mut &'s str| {
        (
            parse_sign,
            alt((parse_infinity, parse_nan, parse_finite_literal(decimal_point))),
        )
            .parse_next(input)
    }
}
