// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte-size wrappers backed by the shared size parser.

use crate::domain::errors::Result;
use crate::domain::size::{parse_size, SizeTable};
use crate::ports::StringDecode;

/// A byte count decoded with binary (1024-based) units, e.g. `"1.5G"` is
/// `1.5 * 2^30` bytes.
///
/// Accepted units are `B`, `K`, `M`, `G`, `T`, `P` and `E`. A token without a unit is
/// taken as a raw byte count. The unit is discarded once applied; only the resulting
/// number of bytes is stored.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringBinaryByteSize;
///
/// let size: StringBinaryByteSize = "1.5G".parse().unwrap();
/// assert_eq!(size.value(), 1610612736.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct StringBinaryByteSize(f64);

impl StringBinaryByteSize {
    /// Returns the decoded number of bytes.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Consumes the wrapper, returning the decoded number of bytes.
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl StringDecode for StringBinaryByteSize {
    fn decode(token: &str) -> Result<Self> {
        Ok(StringBinaryByteSize(parse_size(token, SizeTable::Binary)?))
    }
}

impl From<f64> for StringBinaryByteSize {
    fn from(value: f64) -> Self {
        StringBinaryByteSize(value)
    }
}

impl From<StringBinaryByteSize> for f64 {
    fn from(value: StringBinaryByteSize) -> Self {
        value.0
    }
}

/// A count decoded with decimal (1000-based) units, e.g. `"1.5G"` is `1.5 * 10^9`.
///
/// Accepted units are `K`, `M`, `G`, `T`, `P` and `E`; there is no `B` unit, so
/// `"100B"` is rejected. A token without a unit is taken as a raw count.
///
/// # Examples
///
/// ```
/// use string_encoded::domain::StringDecimalSize;
///
/// let size: StringDecimalSize = "250M".parse().unwrap();
/// assert_eq!(size.value(), 250_000_000.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct StringDecimalSize(f64);

impl StringDecimalSize {
    /// Returns the decoded count.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Consumes the wrapper, returning the decoded count.
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl StringDecode for StringDecimalSize {
    fn decode(token: &str) -> Result<Self> {
        Ok(StringDecimalSize(parse_size(token, SizeTable::Decimal)?))
    }
}

impl From<f64> for StringDecimalSize {
    fn from(value: f64) -> Self {
        StringDecimalSize(value)
    }
}

impl From<StringDecimalSize> for f64 {
    fn from(value: StringDecimalSize) -> Self {
        value.0
    }
}
