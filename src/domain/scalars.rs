// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar wrappers: durations, integers, floats and booleans encoded as strings.
//!
//! Each wrapper holds exactly one parsed native value. A wrapper starts at its zero
//! value (`Default`), is filled in once by [`StringDecode::decode`], and is read back
//! through `value()`.

use crate::domain::duration::parse_duration;
use crate::domain::errors::{ParseError, Result};
use crate::domain::number::parse_float;
use crate::ports::StringDecode;
use time::Duration;

/// A signed [`Duration`] decoded from a string such as `"5m30s"`, `"-1.5h"` or `".5s"`.
///
/// The token is an optional sign and a sequence of `<number><unit>` components, where
/// the number may carry a fraction and the unit is one of `ns`, `us` (`µs`), `ms`, `s`,
/// `m` or `h`. A bare `"0"` decodes to zero. See [`parse_duration`] for the full grammar.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringDuration;
/// use time::Duration;
///
/// let d: StringDuration = "1h30m".parse().unwrap();
/// assert_eq!(d.value(), Duration::minutes(90));
///
/// let d: StringDuration = "-.5s".parse().unwrap();
/// assert_eq!(d.value(), Duration::milliseconds(-500));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringDuration(Duration);

impl StringDuration {
    /// Returns the decoded duration.
    pub fn value(&self) -> Duration {
        self.0
    }

    /// Consumes the wrapper, returning the decoded duration.
    pub fn into_inner(self) -> Duration {
        self.0
    }

    /// Converts to a [`std::time::Duration`], or `None` if the duration is negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        std::time::Duration::try_from(self.0).ok()
    }
}

impl Default for StringDuration {
    fn default() -> Self {
        StringDuration(Duration::ZERO)
    }
}

impl StringDecode for StringDuration {
    fn decode(token: &str) -> Result<Self> {
        parse_duration(token).map(StringDuration)
    }
}

impl From<Duration> for StringDuration {
    fn from(value: Duration) -> Self {
        StringDuration(value)
    }
}

impl From<StringDuration> for Duration {
    fn from(value: StringDuration) -> Self {
        value.0
    }
}

/// An `i64` decoded from a decimal string such as `"42"` or `"-7"`.
///
/// An optional sign is accepted; whitespace, non-digits and values outside the `i64`
/// range are rejected.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringInt;
///
/// let n: StringInt = "42".parse().unwrap();
/// assert_eq!(n.value(), 42);
/// assert!("abc".parse::<StringInt>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringInt(i64);

impl StringInt {
    /// Returns the decoded integer.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Consumes the wrapper, returning the decoded integer.
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl StringDecode for StringInt {
    fn decode(token: &str) -> Result<Self> {
        Ok(StringInt(token.parse::<i64>()?))
    }
}

impl From<i64> for StringInt {
    fn from(value: i64) -> Self {
        StringInt(value)
    }
}

impl From<StringInt> for i64 {
    fn from(value: StringInt) -> Self {
        value.0
    }
}

/// An `f64` decoded from a decimal or scientific-notation string such as `"3.14159"`.
///
/// Literals too large for an `f64` (e.g. `"1e400"`) are rejected rather than rounded
/// to infinity. The spellings `"inf"` and `"infinity"` are still accepted.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringFloat64;
///
/// let f: StringFloat64 = "2.5e3".parse().unwrap();
/// assert_eq!(f.value(), 2500.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct StringFloat64(f64);

impl StringFloat64 {
    /// Returns the decoded float.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Consumes the wrapper, returning the decoded float.
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl StringDecode for StringFloat64 {
    fn decode(token: &str) -> Result<Self> {
        Ok(StringFloat64(parse_float(token)?))
    }
}

impl From<f64> for StringFloat64 {
    fn from(value: f64) -> Self {
        StringFloat64(value)
    }
}

impl From<StringFloat64> for f64 {
    fn from(value: StringFloat64) -> Self {
        value.0
    }
}

/// A `bool` decoded from one of the canonical truthy/falsy spellings.
///
/// Accepted tokens:
/// - `true`: `"1"`, `"t"`, `"T"`, `"true"`, `"TRUE"`, `"True"`
/// - `false`: `"0"`, `"f"`, `"F"`, `"false"`, `"FALSE"`, `"False"`
///
/// Anything else, including `"yes"`, `"on"` or mixed case like `"tRuE"`, is rejected.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringBool;
///
/// let b: StringBool = "T".parse().unwrap();
/// assert!(b.value());
/// assert!("yes".parse::<StringBool>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringBool(bool);

impl StringBool {
    /// Returns the decoded boolean.
    pub fn value(&self) -> bool {
        self.0
    }

    /// Consumes the wrapper, returning the decoded boolean.
    pub fn into_inner(self) -> bool {
        self.0
    }
}

impl StringDecode for StringBool {
    fn decode(token: &str) -> Result<Self> {
        match token {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(StringBool(true)),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(StringBool(false)),
            _ => Err(ParseError::Boolean {
                token: token.to_string(),
            }),
        }
    }
}

impl From<bool> for StringBool {
    fn from(value: bool) -> Self {
        StringBool(value)
    }
}

impl From<StringBool> for bool {
    fn from(value: StringBool) -> Self {
        value.0
    }
}
