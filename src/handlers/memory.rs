//! In-memory handler that records every entry it receives

use crate::core::{Entry, Handler, Result};
use parking_lot::Mutex;

/// Keeps a copy of each delivered entry.
///
/// Useful in tests and for hosts that want to inspect what was logged.
#[derive(Debug, Default)]
pub struct MemoryHandler {
    entries: Mutex<Vec<Entry>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries, oldest first
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<Entry> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<Entry> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn handle(&self, entry: &Entry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }
}
