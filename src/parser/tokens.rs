use winnow::ascii::Caseless;
use winnow::combinator::opt;
use winnow::error::ErrMode;
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::NumericLiteral;

/// Parse an optional leading sign, returning whether it was negative
pub fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a run of one or more ASCII digits
pub fn parse_digit_run<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse the locale's decimal-point character
pub fn parse_decimal_point<'s>(
    decimal_point: char,
) -> impl FnMut(&mut &'s str) -> ModalResult<char> {
    move |input: &mut &'s str| {
        one_of([decimal_point])
            .parse_next(input)
            .map_err(ErrMode::Backtrack)
    }
}

/// Parse the exponent marker, `e` or `E`
pub fn parse_exponent_marker(input: &mut &str) -> ModalResult<char> {
    one_of(['e', 'E'])
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Special value parsers
pub fn parse_infinity<'s>(input: &mut &'s str) -> ModalResult<NumericLiteral<'s>> {
    (literal(Caseless("inf")), opt(literal(Caseless("inity"))))
        .value(NumericLiteral::Infinity)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_nan<'s>(input: &mut &'s str) -> ModalResult<NumericLiteral<'s>> {
    literal(Caseless("nan"))
        .value(NumericLiteral::NaN)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
