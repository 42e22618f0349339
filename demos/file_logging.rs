//! File logging example
//!
//! Uses the factory to log JSON records to a file and stdout at once.
//!
//! Run with: cargo run --example file_logging

use rust_custom_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Custom Logger - File Logging Example ===\n");

    let logger = new_custom_logger(
        LogLevel::Info,
        OutputFormat::Json,
        "application.log",
        &[CustomField::new("name", "TwelveBoyZ")],
    )?;

    println!("1. Logging to both file and stdout:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Per-record fields:");
    for i in 1..=3 {
        logger.info_with_context(
            "Processing item",
            LogContext::new().with_field("item", i).with_field("total", 3),
        );
    }

    println!("\n3. An unwritable path is reported, not swallowed:");
    match new_custom_logger(LogLevel::Info, OutputFormat::Json, "/nonexistent/dir/app.log", &[]) {
        Ok(_) => println!("   unexpectedly opened"),
        Err(e) => println!("   {}", e),
    }

    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
