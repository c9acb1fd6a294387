//! Localized numeric string parsing module
//!
//! This module is responsible for recognizing numeric strings under a locale's
//! separator convention and converting them into machine values. The main
//! entry point is the `parse_number` function.

mod tokens;
mod combinators;
mod number;

pub use number::{parse_integer, parse_number, parse_plain_number};
