//! Handler trait for log output destinations

use super::{entry::Entry, error::Result};
use std::fmt;
use std::sync::Arc;

/// Output sink for dispatched entries.
///
/// Loggers may call `handle` from any number of threads at once; a handler
/// that needs exclusive access to its sink must serialize internally.
pub trait Handler: Send + Sync {
    fn handle(&self, entry: &Entry) -> Result<()>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, entry: &Entry) -> Result<()> {
        (**self).handle(entry)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, entry: &Entry) -> Result<()> {
        (**self).handle(entry)
    }
}

/// Adapter that lets an ordinary closure act as a handler.
///
/// ```
/// use rust_log_facade::{HandlerFn, Logger};
///
/// let logger = Logger::new(HandlerFn::new(|entry| {
///     eprintln!("{} {}", entry.level, entry.message);
///     Ok(())
/// }));
/// logger.info("ready");
/// ```
pub struct HandlerFn<F>(pub F);

impl<F> HandlerFn<F>
where
    F: Fn(&Entry) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        HandlerFn(f)
    }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Entry) -> Result<()> + Send + Sync,
{
    fn handle(&self, entry: &Entry) -> Result<()> {
        (self.0)(entry)
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandlerFn")
    }
}
