// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use serde::Deserialize;
use string_encoded::prelude::*;

/// A service configuration that uses every wrapper type.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub timeout: StringDuration,
    pub workers: StringInt,
    pub ratio: StringFloat64,
    pub cache_size: StringBinaryByteSize,
    pub disk_quota: StringDecimalSize,
    pub debug: StringBool,
    pub hosts: StringArray,
}

/// A JSON document matching [`ServiceConfig`].
#[allow(dead_code)]
pub const SERVICE_JSON: &str = r#"{
    "timeout": "1h30m",
    "workers": "16",
    "ratio": "0.75",
    "cache_size": "1.5G",
    "disk_quota": "1.5G",
    "debug": "T",
    "hosts": "[host1, host2, host3]"
}"#;

/// A YAML document matching [`ServiceConfig`].
#[allow(dead_code)]
pub const SERVICE_YAML: &str = r#"
timeout: "5m30s"
workers: "-3"
ratio: "2.5e-1"
cache_size: "512K"
disk_quota: "2T"
debug: "false"
hosts: "a,b"
"#;
