// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serde adapter for decoding wrappers embedded in structured documents.
//!
//! Every wrapper implements `serde::Deserialize` by extracting the field as a string
//! and handing it to [`StringDecode::decode`]. This works with any serde data format,
//! so the same wrapper can sit inside a JSON response, a YAML file, or any other
//! document a serde deserializer can read.
//!
//! A field that is not string-shaped fails with the format's own type error. A string
//! that does not decode fails with the [`ParseError`](crate::domain::ParseError)
//! message, reported through the format's error type.

use crate::domain::{
    StringArray, StringBinaryByteSize, StringBool, StringDecimalSize, StringDuration,
    StringFloat64, StringInt,
};
use crate::ports::StringDecode;
use serde::de::{Deserialize, Deserializer, Error};

/// Deserializes a string-encoded field into any [`StringDecode`] type.
///
/// This is the shared body of every wrapper's `Deserialize` implementation. It can also
/// be used with `#[serde(deserialize_with = "...")]` for custom decode types.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use string_encoded::adapters::deserialize_token;
/// use string_encoded::domain::StringInt;
///
/// #[derive(Deserialize)]
/// struct Limits {
///     #[serde(deserialize_with = "deserialize_token")]
///     max_conns: StringInt,
/// }
/// ```
pub fn deserialize_token<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: StringDecode,
{
    let token = String::deserialize(deserializer)?;
    T::decode(&token).map_err(D::Error::custom)
}

macro_rules! impl_deserialize {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $wrapper {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserialize_token(deserializer)
                }
            }
        )+
    };
}

impl_deserialize!(
    StringDuration,
    StringInt,
    StringFloat64,
    StringBinaryByteSize,
    StringDecimalSize,
    StringBool,
    StringArray,
);
