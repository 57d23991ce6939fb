//! # Rust Log Facade
//!
//! A hierarchical structured logging facade: leveled, field-annotated entries
//! routed synchronously to a single pluggable [`Handler`].
//!
//! ## Features
//!
//! - **Logger trees**: `with_level`, `with_fields`, `with_field` and
//!   `with_error` derive child loggers without touching the parent
//! - **Inheritance**: level and handler resolve through the parent chain at
//!   log time, fields are carried by each node
//! - **Never fails the caller**: handler errors and panics are reported on
//!   stderr and absorbed
//! - **Process-wide root**: free functions such as [`info`] and [`with_field`]
//!   forward to a shared root logger
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemoryHandler::new());
//! let root = Logger::new(Arc::clone(&memory));
//!
//! root.info("a");
//! root.debug("b");
//! root.with_field("x", "y").warn("c");
//!
//! assert_eq!(memory.len(), 2);
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Entry, FieldValue, Fielder, Fields, Handler, HandlerFn, Level, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Result, FATAL_EXIT_CODE,
    };
    #[cfg(feature = "console")]
    pub use crate::handlers::{ColorMode, TextHandler};
    pub use crate::handlers::{JsonHandler, MemoryHandler};
}

pub use crate::core::{
    Entry, FieldValue, Fielder, Fields, Handler, HandlerFn, Level, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, Result, FATAL_EXIT_CODE,
};
pub use crate::global::{
    debug, error, fatal, info, log, root, set_handler, set_level, set_shared_handler, warn,
    with_error, with_field, with_fields, with_level,
};
#[cfg(feature = "console")]
pub use crate::handlers::{ColorMode, TextHandler};
pub use crate::handlers::{JsonHandler, MemoryHandler};
