// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the string-encoded wrappers.
//!
//! This example demonstrates:
//! - Declaring a configuration struct with wrapper-typed fields
//! - Decoding it from a YAML document where every value is quoted
//! - Reading the decoded values back through their accessors
//! - What a decode failure looks like
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use serde::Deserialize;
use string_encoded::prelude::*;

#[derive(Debug, Deserialize)]
struct ServerConfig {
    listen_timeout: StringDuration,
    max_connections: StringInt,
    load_factor: StringFloat64,
    upload_limit: StringBinaryByteSize,
    monthly_transfer: StringDecimalSize,
    verbose: StringBool,
    peers: StringArray,
}

const CONFIG: &str = r#"
listen_timeout: "1m30s"
max_connections: "512"
load_factor: "0.85"
upload_limit: "1.5G"
monthly_transfer: "2T"
verbose: "True"
peers: "[\"10.0.0.1\", \"10.0.0.2\", \"10.0.0.3\"]"
"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Trace level shows which size unit matched each token
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== String-Encoded Wrappers: Basic Usage ===\n");

    let config: ServerConfig = serde_yaml::from_str(CONFIG)?;
    tracing::info!("decoded server configuration");

    println!("listen_timeout:   {:?}", config.listen_timeout.value());
    println!("max_connections:  {}", config.max_connections.value());
    println!("load_factor:      {}", config.load_factor.value());
    println!("upload_limit:     {} bytes", config.upload_limit.value());
    println!("monthly_transfer: {} bytes", config.monthly_transfer.value());
    println!("verbose:          {}", config.verbose.value());
    println!("peers:");
    for peer in &config.peers {
        println!("  - {}", peer);
    }

    println!("\n--- Decoding tokens directly ---");
    let quota: StringDecimalSize = "750M".parse()?;
    println!("\"750M\" (decimal) = {}", quota.value());
    let quota: StringBinaryByteSize = "750M".parse()?;
    println!("\"750M\" (binary)  = {}", quota.value());

    println!("\n--- A failing document ---");
    let broken = CONFIG.replace(r#"verbose: "True""#, r#"verbose: "yes""#);
    match serde_yaml::from_str::<ServerConfig>(&broken) {
        Ok(_) => println!("unexpectedly decoded"),
        Err(e) => {
            tracing::warn!(error = %e, "configuration rejected");
            println!("✗ {}", e);
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
