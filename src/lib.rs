// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed wrappers for values that structured documents encode as strings.
//!
//! Configuration files, external APIs and environment-derived documents often quote
//! values that are not really strings: `"5m30s"`, `"42"`, `"1.5G"`, `"true"` or
//! `"[a, b, c]"`. This crate provides one wrapper type per value domain. Each wrapper
//! decodes the quoted token into its natural Rust type when the surrounding document is
//! deserialized, and exposes the result through `value()`.
//!
//! # Architecture
//!
//! - **Domain Layer**: The wrapper types, the size parser and its unit tables, errors
//! - **Ports**: The `StringDecode` trait every wrapper implements
//! - **Adapters**: The serde `Deserialize` integration
//!
//! # Wrapper Types
//!
//! | Wrapper | Decodes | Value |
//! |---|---|---|
//! | [`StringDuration`](domain::StringDuration) | `"-1.5h"` | `time::Duration` |
//! | [`StringInt`](domain::StringInt) | `"42"` | `i64` |
//! | [`StringFloat64`](domain::StringFloat64) | `"3.14"` | `f64` |
//! | [`StringBinaryByteSize`](domain::StringBinaryByteSize) | `"1.5G"` (1024-based) | `f64` |
//! | [`StringDecimalSize`](domain::StringDecimalSize) | `"1.5G"` (1000-based) | `f64` |
//! | [`StringBool`](domain::StringBool) | `"true"`, `"T"`, `"1"` | `bool` |
//! | [`StringArray`](domain::StringArray) | `"[a, b, c]"` | `Vec<String>` |
//!
//! # Quick Start
//!
//! ```rust
//! use serde::Deserialize;
//! use string_encoded::prelude::*;
//!
//! #[derive(Deserialize)]
//! struct Cache {
//!     ttl: StringDuration,
//!     max_size: StringBinaryByteSize,
//!     enabled: StringBool,
//! }
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let cache: Cache = serde_json::from_str(
//!     r#"{ "ttl": "5m", "max_size": "512M", "enabled": "true" }"#,
//! )?;
//!
//! assert_eq!(cache.ttl.value().whole_seconds(), 300);
//! assert_eq!(cache.max_size.value(), 512.0 * 1024.0 * 1024.0);
//! assert!(cache.enabled.value());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::deserialize_token;
    pub use crate::domain::{
        parse_size, ParseError, Result, SizeTable, StringArray, StringBinaryByteSize,
        StringBool, StringDecimalSize, StringDuration, StringFloat64, StringInt,
    };
    pub use crate::ports::StringDecode;
}
