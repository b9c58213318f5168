// SPDX-License-Identifier: MIT OR Apache-2.0

//! Duration grammar shared by [`StringDuration`](crate::domain::StringDuration).
//!
//! A duration token is an optional sign followed by one or more components, each a
//! decimal number (with optional fraction) and a unit: `"300ms"`, `"-1.5h"`,
//! `"2h45m"`, `".5s"`. The bare token `"0"` needs no unit. Valid units are `ns`,
//! `us` (or `µs`), `ms`, `s`, `m` and `h`. The result is a signed count of nanoseconds
//! and must fit in an `i64`.

use crate::domain::errors::{ParseError, Result};
use time::Duration;

/// Upper bound on the unsigned magnitude accumulated while parsing (`2^63`).
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Nanoseconds per unit.
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{00b5}s", 1_000), // MICRO SIGN
    ("\u{03bc}s", 1_000), // GREEK SMALL LETTER MU
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Parses a duration token into a signed [`Duration`].
///
/// # Errors
///
/// - [`ParseError::InvalidDuration`] for malformed tokens and values beyond the `i64`
///   nanosecond range
/// - [`ParseError::MissingDurationUnit`] when a number has no unit
/// - [`ParseError::UnknownDurationUnit`] when a unit is not recognized
///
/// # Examples
///
/// ```
/// use string_encoded::domain::duration::parse_duration;
/// use time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
/// assert_eq!(parse_duration("-1.5s").unwrap(), Duration::milliseconds(-1500));
/// assert_eq!(parse_duration(".5s").unwrap(), Duration::milliseconds(500));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(token: &str) -> Result<Duration> {
    let invalid = || ParseError::InvalidDuration {
        token: token.to_string(),
    };

    let (negative, mut rest) = match token.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (whole, after_whole) = leading_int(rest).ok_or_else(invalid)?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let mut fraction = 0u64;
        let mut scale = 1f64;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, digits_scale, after_fraction) = leading_fraction(after_dot);
            has_fraction = after_fraction.len() != after_dot.len();
            fraction = digits;
            scale = digits_scale;
            rest = after_fraction;
        }
        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            return Err(ParseError::MissingDurationUnit {
                token: token.to_string(),
            });
        }
        let (unit, after_unit) = rest.split_at(unit_end);
        rest = after_unit;

        let nanos_per_unit = UNITS
            .iter()
            .find(|(key, _)| *key == unit)
            .map(|(_, nanos)| *nanos)
            .ok_or_else(|| ParseError::UnknownDurationUnit {
                unit: unit.to_string(),
                token: token.to_string(),
            })?;

        if whole > MAX_MAGNITUDE / nanos_per_unit {
            return Err(invalid());
        }
        let mut component = whole * nanos_per_unit;
        if fraction > 0 {
            component += (fraction as f64 * (nanos_per_unit as f64 / scale)) as u64;
            if component > MAX_MAGNITUDE {
                return Err(invalid());
            }
        }

        total = total
            .checked_add(component)
            .filter(|sum| *sum <= MAX_MAGNITUDE)
            .ok_or_else(invalid)?;
    }

    if negative {
        // 2^63 wraps to i64::MIN, which is exactly -2^63.
        return Ok(Duration::nanoseconds((total as i64).wrapping_neg()));
    }
    if total > i64::MAX as u64 {
        return Err(invalid());
    }
    Ok(Duration::nanoseconds(total as i64))
}

/// Consumes leading ASCII digits. Returns `None` if the value exceeds `2^63`.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());

    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        if value > MAX_MAGNITUDE / 10 {
            return None;
        }
        value = value * 10 + u64::from(b - b'0');
        if value > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consumes leading fraction digits, returning the digits as an integer and the power
/// of ten they are scaled by. Digits past the precision of a `u64` are skipped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());

    let mut value: u64 = 0;
    let mut scale = 1f64;
    let mut overflow = false;
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        if value > (i64::MAX as u64) / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(b - b'0');
        if next > MAX_MAGNITUDE {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[end..])
}
