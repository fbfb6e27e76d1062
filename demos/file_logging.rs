//! File logging example
//!
//! Demonstrates logging to console and file appenders at different levels.
//!
//! Run with: cargo run --example file_logging

use rust_named_logger::prelude::*;
use rust_named_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Named Logger - File Logging Example ===\n");

    let registry = Registry::new();
    registry.set_root_level(LogLevel::Info);

    // Everything from INFO up goes to the console; only errors reach the file
    registry.add_appender(ConsoleAppender::builder("console").build());
    registry.add_appender(
        FileAppender::builder("errors", "application.log")
            .level(LogLevel::Error)
            .build()?,
    );

    let logger = registry.logger("app");

    println!("1. Logging to console and file:");
    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warn("Using default settings for some options")?;
    logger.error("Failed to load optional plugin")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i)?;
        if i == 3 {
            warn!(logger, "Item {} took longer than expected", i)?;
        }
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the error output");

    Ok(())
}
