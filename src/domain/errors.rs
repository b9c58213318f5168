// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for decoding string-encoded values.
//!
//! Every wrapper type reports failure through the single [`ParseError`] type. Where the
//! failure comes from a standard parsing primitive the primitive's error is carried
//! through unchanged, so its message is exactly what the primitive reports.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The error type for decoding a string-encoded token.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::errors::ParseError;
/// use string_encoded::domain::StringInt;
///
/// let err = "abc".parse::<StringInt>().unwrap_err();
/// assert!(matches!(err, ParseError::Integer(_)));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The token does not match the duration grammar, or overflows the duration range.
    #[error("invalid duration {token:?}")]
    InvalidDuration {
        /// The rejected token
        token: String,
    },

    /// A duration component has a number but no unit, e.g. `"10"`.
    #[error("missing unit in duration {token:?}")]
    MissingDurationUnit {
        /// The rejected token
        token: String,
    },

    /// A duration component uses a unit outside `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`.
    #[error("unknown unit {unit:?} in duration {token:?}")]
    UnknownDurationUnit {
        /// The unrecognized unit
        unit: String,
        /// The rejected token
        token: String,
    },

    /// The token is not a decimal integer, or overflows `i64`.
    #[error(transparent)]
    Integer(#[from] ParseIntError),

    /// The token (or the numeric prefix of a size token) is not a float.
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// The token is a well-formed float whose magnitude is too large for `f64`.
    #[error("parsing {token:?}: value out of range")]
    FloatRange {
        /// The rejected token
        token: String,
    },

    /// The token is not one of the accepted boolean spellings.
    #[error("invalid boolean syntax: {token:?}")]
    Boolean {
        /// The rejected token
        token: String,
    },
}

/// A specialized Result type for decode operations.
pub type Result<T> = std::result::Result<T, ParseError>;
