// SPDX-License-Identifier: MIT OR Apache-2.0

//! Float parsing with range checking, shared by the float and size wrappers.

use crate::domain::errors::{ParseError, Result};

/// Parses `token` as an `f64`, rejecting finite literals too large to represent.
///
/// `"inf"` and `"infinity"` (any case, optionally signed) still decode to infinity;
/// only a numeric literal that overflows to infinity is an error.
pub(crate) fn parse_float(token: &str) -> Result<f64> {
    let value = token.parse::<f64>()?;
    if value.is_infinite() && !is_infinity_literal(token) {
        return Err(ParseError::FloatRange {
            token: token.to_string(),
        });
    }
    Ok(value)
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
