//! Process-wide root logger
//!
//! A single root shared by the whole process, starting at `Info` with no
//! handler, plus free functions that forward to it. Until [`set_handler`] is
//! called every entry is discarded.
//!
//! [`set_handler`] and [`set_level`] reconfigure the root in place. Call them
//! during start-up, before other threads begin logging: a log call racing
//! with a reconfiguration may observe either the old or the new setting.
//!
//! ```
//! use rust_log_facade::{self as log, Level, MemoryHandler};
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemoryHandler::new());
//! log::set_handler(Arc::clone(&memory));
//! log::set_level(Level::Debug);
//!
//! log::with_field("job", "reindex").debug("starting");
//! assert_eq!(memory.len(), 1);
//! ```

use crate::core::{FieldValue, Handler, Level, Logger};
use std::fmt;
use std::sync::{Arc, LazyLock};

static ROOT: LazyLock<Logger> = LazyLock::new(Logger::discard);

/// The process-wide root logger
pub fn root() -> &'static Logger {
    &ROOT
}

/// Set the root handler. Not meant to race with in-flight log calls.
pub fn set_handler<H: Handler + 'static>(handler: H) {
    ROOT.set_handler(handler);
}

pub fn set_shared_handler(handler: Arc<dyn Handler>) {
    ROOT.set_shared_handler(handler);
}

/// Set the root level. Not meant to race with in-flight log calls.
pub fn set_level(level: Level) {
    ROOT.set_level(level);
}

#[must_use]
pub fn with_level(level: Level) -> Logger {
    ROOT.with_level(level)
}

#[must_use]
pub fn with_fields<I, K, V>(fields: I) -> Logger
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    ROOT.with_fields(fields)
}

#[must_use]
pub fn with_field(key: impl Into<String>, value: impl Into<FieldValue>) -> Logger {
    ROOT.with_field(key, value)
}

#[must_use]
pub fn with_error<E: fmt::Display + ?Sized>(err: &E) -> Logger {
    ROOT.with_error(err)
}

pub fn log(level: Level, message: impl Into<String>) {
    ROOT.log(level, message);
}

pub fn debug(message: impl Into<String>) {
    ROOT.debug(message);
}

pub fn info(message: impl Into<String>) {
    ROOT.info(message);
}

pub fn warn(message: impl Into<String>) {
    ROOT.warn(message);
}

pub fn error(message: impl Into<String>) {
    ROOT.error(message);
}

/// Log at `Fatal` on the root, then exit the process
pub fn fatal(message: impl Into<String>) -> ! {
    ROOT.fatal(message)
}
