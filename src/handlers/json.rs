//! JSON handler for structured logging

use crate::core::{Entry, Handler, Result};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON lines handler
///
/// Writes each entry as a single-line JSON object (JSONL format):
///
/// ```text
/// {"fields":{"user":"ann"},"level":"info","message":"login","timestamp":"2025-01-08T10:30:45.123Z"}
/// ```
pub struct JsonHandler {
    writer: Mutex<Box<dyn Write + Send>>,
    pretty: bool,
}

impl JsonHandler {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            pretty: false,
        }
    }

    /// Append to a file, creating it if needed
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(Self::new(BufWriter::new(file)))
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Pretty-print each entry (multi-line output, no longer JSONL)
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl Handler for JsonHandler {
    fn handle(&self, entry: &Entry) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(entry)?
        } else {
            serde_json::to_string(entry)?
        };

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()?;
        Ok(())
    }
}
