//! Type definitions for localized number parsing
//!
//! This module defines the separator conventions of a locale, the decomposed
//! representation of a recognized numeric literal, and the parse error type.

use std::fmt;

/// Separator conventions of a locale
///
/// Describes the two characters a locale uses when writing numbers. The
/// parser only reads these values; they carry no further locale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Character separating the integer part from the fraction part
    pub decimal_point: char,
    /// Character grouping the digits of the integer part
    pub thousands_separator: char,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            thousands_separator: ',',
        }
    }
}

impl LocaleSettings {
    /// Replace the decimal-point character
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Replace the thousands-separator character
    pub fn with_thousands_separator(mut self, thousands_separator: char) -> Self {
        self.thousands_separator = thousands_separator;
        self
    }
}

/// A numeric literal recognized from the input, decomposed into its textual parts
#[derive(Debug, Clone, PartialEq)]
pub enum NumericLiteral<'s> {
    /// A finite number: integer digits, optional fraction digits, optional exponent
    Finite {
        /// Digits before the decimal point; empty for forms like ".5"
        integer: &'s str,
        /// Digits after the decimal point, if a decimal point was present.
        /// `Some("")` for forms like "5." with nothing after the point.
        fraction: Option<&'s str>,
        /// Exponent suffix, if present
        exponent: Option<Exponent<'s>>,
    },
    /// An infinity form, "inf" or "infinity" (case-insensitive)
    Infinity,
    /// A not-a-number form, "nan" (case-insensitive)
    NaN,
}

/// An exponent suffix such as `e5`, `E+10` or `e-3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent<'s> {
    /// True if the exponent carried a `-` sign
    pub negative: bool,
    /// The exponent's digits
    pub digits: &'s str,
}

/// Error type for numeric string parsing
#[derive(Debug, Clone, PartialEq)]
pub enum NumberParseError {
    /// The input was empty, or reduced to nothing after whitespace and
    /// group-separator removal
    Empty,
    /// The input was not a valid number under the locale convention
    Invalid(String),
    /// The input was a well-formed integer whose value does not fit the
    /// target type
    OutOfRange(String),
}

impl fmt::Display for NumberParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberParseError::Empty => write!(f, "Empty numeric string"),
            NumberParseError::Invalid(input) => write!(f, "Not a valid number: '{}'", input),
            NumberParseError::OutOfRange(input) => write!(f, "Number out of range: '{}'", input),
        }
    }
}

impl std::error::Error for NumberParseError {}
