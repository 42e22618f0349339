//! Basic logger usage example
//!
//! Builds a console-format logger writing to stdout and shows levels,
//! structured fields and child loggers.
//!
//! Run with: cargo run --example basic_usage

use rust_custom_logger::prelude::*;
use rust_custom_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Custom Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .encoder(ConsoleEncoder::new(EncoderConfig::default()).with_colors(true))
        .target(MultiSink::stdout())
        .add_caller(true)
        .stacktrace_level(LogLevel::Error)
        .build();

    println!("1. Logging at different levels (trace is below the threshold):");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");

    println!("\n2. Structured fields:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port; "tls" => false);
    warn!(logger, "Slow request"; "path" => "/api/users", "elapsed" => std::time::Duration::from_millis(912));

    println!("\n3. Child loggers:");
    let db = logger.named("db").with_field("pool", "primary");
    db.info("Connection established");
    db.named("migrations").info("Schema up to date");

    println!("\n4. Errors carry a stack trace:");
    logger.error("This is an error message");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
