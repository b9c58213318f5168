// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait that every wrapper type implements and that the
//! adapters layer builds on.

pub mod decode;

// Re-export commonly used types
pub use decode::StringDecode;
