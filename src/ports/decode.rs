// SPDX-License-Identifier: MIT OR Apache-2.0

//! String decode trait definition.
//!
//! This module defines the `StringDecode` trait, the single decode capability shared by
//! every wrapper type. Document adapters (see [`crate::adapters`]) only ever talk to
//! wrappers through this trait, so the extract-then-decode skeleton exists once.

use crate::domain::{
    Result, StringArray, StringBinaryByteSize, StringBool, StringDecimalSize, StringDuration,
    StringFloat64, StringInt,
};
use std::str::FromStr;

/// A type that can be decoded from a string-encoded token.
///
/// Implementations parse the whole token and either return a fully populated value or
/// a [`ParseError`](crate::domain::ParseError). There is no partial result.
///
/// # Examples
///
/// ```rust
/// use string_encoded::domain::Result;
/// use string_encoded::ports::StringDecode;
///
/// struct Port(u16);
///
/// impl StringDecode for Port {
///     fn decode(token: &str) -> Result<Self> {
///         Ok(Port(token.parse()?))
///     }
/// }
///
/// assert_eq!(Port::decode("8080").unwrap().0, 8080);
/// ```
pub trait StringDecode: Sized {
    /// Decodes a token into a new value.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw string extracted from the document
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - The fully decoded value
    /// * `Err(ParseError)` - The token does not match this type's grammar
    fn decode(token: &str) -> Result<Self>;
}

/// Implements `FromStr` for wrapper types in terms of [`StringDecode`].
macro_rules! impl_from_str {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl FromStr for $wrapper {
                type Err = crate::domain::ParseError;

                fn from_str(s: &str) -> Result<Self> {
                    <$wrapper as StringDecode>::decode(s)
                }
            }
        )+
    };
}

impl_from_str!(
    StringDuration,
    StringInt,
    StringFloat64,
    StringBinaryByteSize,
    StringDecimalSize,
    StringBool,
    StringArray,
);
