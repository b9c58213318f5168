// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the wrapper types and their parsers.
//!
//! This module contains the string-encoded wrapper types, the shared size parser with
//! its two unit tables, and the error type. It is independent of any document format;
//! the serde integration lives in the adapters layer.

pub mod byte_size;
pub mod duration;
pub mod errors;
mod number;
pub mod scalars;
pub mod size;
pub mod string_array;

// Re-export commonly used types
pub use byte_size::{StringBinaryByteSize, StringDecimalSize};
pub use duration::parse_duration;
pub use errors::{ParseError, Result};
pub use scalars::{StringBool, StringDuration, StringFloat64, StringInt};
pub use size::{parse_size, SizeTable};
pub use string_array::StringArray;
