//! Core logger types and traits

pub mod entry;
pub mod error;
pub mod fields;
pub mod handler;
pub mod level;
pub mod logger;
pub mod metrics;

pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fielder, Fields};
pub use handler::{Handler, HandlerFn};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
