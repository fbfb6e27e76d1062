//! Config loading example
//!
//! Writes a small JSON config next to the binary's working directory, loads
//! it, and logs through the loggers it configures.
//!
//! Run with: cargo run --example config_loading

use rust_named_logger::prelude::*;
use std::fs;

const CONFIG: &str = r#"{
    "loggers": { "root": "info", "http": "warn" },
    "appenders": [
        { "name": "console", "type": "console", "formatter": "color" },
        { "name": "audit", "type": "file", "file": "audit.log", "level": "error", "truncate": true }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - Config Loading Example ===\n");

    let config_path = std::env::temp_dir().join("rust_named_logger_demo.json");
    fs::write(&config_path, CONFIG)?;

    let registry = Registry::new();
    load_config(&registry, &config_path)?;

    let http = registry.logger("http");
    let jobs = registry.logger("jobs");

    http.info("GET /health (hidden, http is at WARN)")?;
    http.warn("GET /slow took 2.3s")?;
    jobs.info("nightly job queued")?;
    jobs.error("nightly job failed, see audit.log")?;

    println!(
        "\nAudit log written to {}",
        config_path.with_file_name("audit.log").display()
    );

    Ok(())
}
