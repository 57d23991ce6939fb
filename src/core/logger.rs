//! Hierarchical logger implementation
//!
//! Every logger is a node in a tree. A node may override the level, the
//! handler, or both; whatever it leaves unset is resolved from its ancestors
//! at the moment a message is logged. Fields are resolved eagerly instead:
//! each derived node carries the complete field set visible at that point.

use super::{
    entry::Entry,
    error::Result,
    fields::{FieldValue, Fielder, Fields},
    handler::Handler,
    level::Level,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal entry has been dispatched
pub const FATAL_EXIT_CODE: i32 = 1;

struct Node {
    level: RwLock<Level>,
    handler: RwLock<Option<Arc<dyn Handler>>>,
    fields: Fields,
    parent: Option<Arc<Node>>,
    /// Shared by the whole tree
    metrics: Arc<LoggerMetrics>,
}

/// A leveled, field-carrying logger.
///
/// Cloning a `Logger` is cheap and yields a handle to the same node. The
/// `with_*` methods never modify the receiver; they return a child node whose
/// parent is the receiver.
///
/// # Example
///
/// ```
/// use rust_log_facade::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryHandler::new());
/// let root = Logger::new(Arc::clone(&memory));
///
/// let request = root.with_field("request_id", "abc-123");
/// request.info("handling request");
/// request.debug("hidden at the default info level");
///
/// let entries = memory.entries();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].fields.get("request_id").and_then(|v| v.as_str()), Some("abc-123"));
/// ```
#[derive(Clone)]
pub struct Logger {
    node: Arc<Node>,
}

impl Logger {
    /// Create a root logger at `Info` that sends entries to `handler`
    #[must_use]
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self::root(Level::Info, Some(Arc::new(handler)), Fields::new())
    }

    /// Create a root logger at `Info` with no handler; every call is discarded
    #[must_use]
    pub fn discard() -> Self {
        Self::root(Level::Info, None, Fields::new())
    }

    pub(crate) fn root(level: Level, handler: Option<Arc<dyn Handler>>, fields: Fields) -> Self {
        Self {
            node: Arc::new(Node {
                level: RwLock::new(level),
                handler: RwLock::new(handler),
                fields,
                parent: None,
                metrics: Arc::new(LoggerMetrics::new()),
            }),
        }
    }

    fn child(&self, level: Level, fields: Fields) -> Self {
        Self {
            node: Arc::new(Node {
                level: RwLock::new(level),
                handler: RwLock::new(None),
                fields,
                parent: Some(Arc::clone(&self.node)),
                metrics: Arc::clone(&self.node.metrics),
            }),
        }
    }

    /// Derive a logger with its own level.
    ///
    /// The child shares this logger's field set and inherits its handler.
    #[must_use]
    pub fn with_level(&self, level: Level) -> Logger {
        self.child(level, self.node.fields.clone())
    }

    /// Derive a logger carrying additional fields.
    ///
    /// Keys in `fields` replace keys already present. Level and handler are
    /// inherited.
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.child(Level::Unset, self.node.fields.merged(fields))
    }

    /// Derive a logger carrying one additional field
    #[must_use]
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Logger {
        self.with_fields([(key.into(), value.into())])
    }

    /// Derive a logger whose `error` field holds the error's display message
    #[must_use]
    pub fn with_error<E: fmt::Display + ?Sized>(&self, err: &E) -> Logger {
        self.with_field("error", err.to_string())
    }

    /// Derive a logger carrying the fields provided by `fielder`
    #[must_use]
    pub fn with_fielder<F: Fielder + ?Sized>(&self, fielder: &F) -> Logger {
        self.child(Level::Unset, self.node.fields.overlay(&fielder.fields()))
    }

    /// Override this node's level in place.
    ///
    /// Intended for configuring a root before it is shared. Every logger
    /// derived from this node observes the change on its next call.
    pub fn set_level(&self, level: Level) {
        *self.node.level.write() = level;
    }

    /// Replace this node's handler in place (see [`Logger::set_level`])
    pub fn set_handler<H: Handler + 'static>(&self, handler: H) {
        self.set_shared_handler(Arc::new(handler));
    }

    pub fn set_shared_handler(&self, handler: Arc<dyn Handler>) {
        *self.node.handler.write() = Some(handler);
    }

    /// Remove this node's handler so it inherits again (or discards, for a root)
    pub fn clear_handler(&self) {
        *self.node.handler.write() = None;
    }

    /// The level set on this node, `Unset` if it inherits
    pub fn level(&self) -> Level {
        *self.node.level.read()
    }

    /// Resolve the level by walking up the parent chain; `Info` if none is set
    pub fn effective_level(&self) -> Level {
        let mut node = Some(&self.node);
        while let Some(current) = node {
            let level = *current.level.read();
            if !level.is_unset() {
                return level;
            }
            node = current.parent.as_ref();
        }
        Level::Info
    }

    /// Resolve the handler by walking up the parent chain
    pub fn effective_handler(&self) -> Option<Arc<dyn Handler>> {
        let mut node = Some(&self.node);
        while let Some(current) = node {
            if let Some(handler) = current.handler.read().as_ref() {
                return Some(Arc::clone(handler));
            }
            node = current.parent.as_ref();
        }
        None
    }

    /// True if a message at `level` would pass this logger's level gate
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.effective_level()
    }

    /// Fields attached to every entry this logger produces
    pub fn fields(&self) -> &Fields {
        &self.node.fields
    }

    pub fn parent(&self) -> Option<Logger> {
        self.node.parent.as_ref().map(|node| Logger {
            node: Arc::clone(node),
        })
    }

    /// Dispatch counters shared with every logger in this tree
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.node.metrics
    }

    pub fn log(&self, level: Level, message: impl Into<String>) {
        if level < self.effective_level() {
            self.node.metrics.record_filtered();
            return;
        }

        let Some(handler) = self.effective_handler() else {
            self.node.metrics.record_unhandled();
            return;
        };

        let entry = Entry::new(self.node.fields.clone(), level, message.into());
        Self::dispatch(handler.as_ref(), &entry, &self.node.metrics);
    }

    /// Hand an entry to the handler, absorbing errors and panics.
    ///
    /// Failures are reported on stderr and counted; they never reach the
    /// caller of the log method.
    fn dispatch(handler: &dyn Handler, entry: &Entry, metrics: &LoggerMetrics) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler.handle(entry)
        }));

        match result {
            Ok(Ok(())) => {
                metrics.record_delivered();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Handler failed to deliver entry: {}", e);
                metrics.record_failed();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!("[LOGGER CRITICAL] Handler panicked: {}", panic_msg);
                metrics.record_failed();
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Log at `Fatal`, then exit the process with [`FATAL_EXIT_CODE`].
    ///
    /// The process exits whether the handler succeeded, failed, or was absent.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.log(Level::Fatal, message);
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("has_handler", &self.node.handler.read().is_some())
            .field("fields", &self.node.fields)
            .field("has_parent", &self.node.parent.is_some())
            .finish()
    }
}

/// Builder for constructing a root Logger with a fluent API
///
/// # Example
/// ```
/// use rust_log_facade::prelude::*;
///
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .handler(MemoryHandler::new())
///     .field("service", "api-gateway")
///     .build();
///
/// assert_eq!(logger.effective_level(), Level::Debug);
/// assert_eq!(logger.fields().len(), 1);
/// ```
pub struct LoggerBuilder {
    level: Level,
    handler: Option<Arc<dyn Handler>>,
    fields: Fields,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            handler: None,
            fields: Fields::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Read the level from an environment variable.
    ///
    /// An unset or empty variable keeps the current level; an unknown token
    /// is an `InvalidLevel` error.
    pub fn level_from_env(mut self, var: &str) -> Result<Self> {
        if let Ok(value) = std::env::var(var) {
            self.level.set_from_text(value.trim())?;
        }
        Ok(self)
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields = self.fields.merged([(key.into(), value.into())]);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields = self.fields.merged(fields);
        self
    }

    /// Build the root Logger
    pub fn build(self) -> Logger {
        Logger::root(self.level, self.handler, self.fields)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for a root Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
