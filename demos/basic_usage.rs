//! Basic logger usage example
//!
//! Demonstrates named loggers, the root level and per-logger levels with a
//! console appender.
//!
//! Run with: cargo run --example basic_usage

use rust_named_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - Basic Usage Example ===\n");

    let registry = Registry::new();
    registry.add_appender(
        ConsoleAppender::builder("console")
            .formatter(Arc::new(ColorFormatter::new()))
            .build(),
    );

    let app = registry.logger("app");
    let db = registry.get_or_create_logger("app.db", Some(LogLevel::Warn.into()));

    println!("1. Root level is DEBUG, 'app' follows it:");
    app.trace("This is a trace message (hidden)")?;
    app.debug("This is a debug message")?;
    app.info("This is an info message")?;
    app.warn("This is a warning message")?;
    app.error("This is an error message")?;

    println!("\n2. 'app.db' has its own WARN level:");
    db.info("Connection pool warmed up (hidden)")?;
    db.warn("Slow query detected")?;

    println!("\n3. Raising the root level to WARN:");
    registry.set_root_level(LogLevel::Warn);
    app.info("Info message (hidden)")?;
    app.warn("Warning message (visible)")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
