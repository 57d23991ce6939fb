//! JSON output example
//!
//! Sends entries to stdout as JSON lines, one object per entry.
//!
//! Run with: cargo run --example json_output

use rust_log_facade::prelude::*;
use rust_log_facade::{fields, info};

fn main() {
    let logger = Logger::new(JsonHandler::stdout()).with_fielder(&fields! {
        "app" => "json-demo",
        "version" => "0.1.0",
    });

    logger.info("Application started");
    info!(logger.with_field("port", 8080), "Listening on port {}", 8080);
    logger
        .with_fields([("cache_hits", 120u64), ("cache_misses", 3u64)])
        .warn("Cache warming took longer than expected");
}
