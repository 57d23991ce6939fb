//! Derived logger example
//!
//! Builds a small logger tree: a root configured once at start-up, a
//! per-component child carrying fields, and per-request children.
//!
//! Run with: cargo run --example derived_loggers

use rust_log_facade::prelude::*;
use std::thread;

fn handle_request(logger: &Logger, id: u32) {
    let request = logger.with_fields([("request_id", FieldValue::from(id)), ("path", "/orders".into())]);
    request.debug("Parsing body");
    request.info("Request accepted");

    if id % 3 == 0 {
        let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
        request.with_error(&err).error("Request failed");
    }
}

fn main() {
    println!("=== Rust Log Facade - Derived Loggers Example ===\n");

    let root = Logger::builder()
        .level(Level::Info)
        .handler(TextHandler::stderr())
        .field("service", "orders")
        .build();

    let api = root.with_field("component", "api");
    let verbose = api.with_level(Level::Debug);

    let workers: Vec<_> = (1..=4)
        .map(|id| {
            let logger = if id == 1 { verbose.clone() } else { api.clone() };
            thread::spawn(move || handle_request(&logger, id))
        })
        .collect();

    for worker in workers {
        let _ = worker.join();
    }

    let metrics = root.metrics();
    println!(
        "\nDelivered: {}, filtered: {}, failed: {}",
        metrics.delivered(),
        metrics.filtered(),
        metrics.failed()
    );
}
