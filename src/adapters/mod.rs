// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer connecting the wrappers to document decoding frameworks.
//!
//! The only adapter is the serde one: it gives every wrapper type a `Deserialize`
//! implementation built on the `StringDecode` port.

pub mod serde_document;

pub use serde_document::deserialize_token;
