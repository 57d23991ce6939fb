//! Basic logger usage example
//!
//! Demonstrates the process-wide root logger with the text handler and
//! level filtering.
//!
//! Run with: cargo run --example basic_usage

use rust_log_facade::prelude::*;
use rust_log_facade::{self as log, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Log Facade - Basic Usage Example ===\n");

    // Nothing is printed until a handler is installed
    log::info("This message is discarded");

    log::set_handler(TextHandler::stderr());
    log::set_level(Level::Debug);

    println!("1. Logging at different levels:");
    log::debug("This is a debug message");
    log::info("This is an info message");
    log::warn("This is a warning message");
    log::error("This is an error message");

    println!("\n2. Raising the level to WARN:");
    log::set_level(Level::Warn);
    log::debug("Debug message (hidden)");
    log::info("Info message (hidden)");
    warn!(log::root(), "Disk usage at {}%", 91);

    println!("\n3. Parsing a level from configuration text:");
    let mut level = Level::Info;
    level.set_from_text("")?;
    info!(log::with_level(level), "Empty text keeps the level at {}", level);
    level.set_from_text("debug")?;
    info!(log::with_level(level), "Level is now {}", level);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
