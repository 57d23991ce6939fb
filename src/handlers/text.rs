//! Human-readable text handler
//!
//! One line per entry:
//!
//! ```text
//! 2025/01/08 10:30:45 +0000 | INFO| request served method=GET status=200
//! ```
//!
//! Fields are printed in key order and the reserved `service` field is left
//! out. Colors are applied per [`ColorMode`].

use crate::core::{Entry, Handler, Level, Result};
use chrono::{DateTime, Local};
use colored::Color;
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::{IsTerminal, Write};

/// Default timestamp layout
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";

/// Field that is never printed by this handler
const SERVICE_FIELD: &str = "service";

/// Whether ANSI colors are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when the sink is an interactive terminal
    #[default]
    Auto,
    /// Always color, whatever the sink
    Force,
    /// Never color
    Never,
}

pub struct TextHandler {
    writer: Mutex<Box<dyn Write + Send>>,
    is_terminal: bool,
    color_mode: ColorMode,
    time_format: String,
}

impl TextHandler {
    /// Write to an arbitrary sink. `ColorMode::Auto` never colors here since
    /// the sink cannot be checked for a terminal.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            is_terminal: false,
            color_mode: ColorMode::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Write to a sink that can report whether it is a terminal
    pub fn with_terminal<W: Write + IsTerminal + Send + 'static>(writer: W) -> Self {
        let is_terminal = writer.is_terminal();
        Self {
            is_terminal,
            ..Self::new(writer)
        }
    }

    pub fn stderr() -> Self {
        Self::with_terminal(std::io::stderr())
    }

    pub fn stdout() -> Self {
        Self::with_terminal(std::io::stdout())
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Set a strftime-compatible timestamp format
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_log_facade::handlers::TextHandler;
    ///
    /// let handler = TextHandler::stderr().with_time_format("%H:%M:%S");
    /// ```
    #[must_use]
    pub fn with_time_format(mut self, format_str: &str) -> Self {
        self.time_format = format_str.to_string();
        self
    }

    pub fn uses_color(&self) -> bool {
        match self.color_mode {
            ColorMode::Force => true,
            ColorMode::Auto => self.is_terminal,
            ColorMode::Never => false,
        }
    }

    fn level_label(level: Level) -> &'static str {
        match level {
            Level::Unset => "UNSET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    fn level_color(level: Level) -> Color {
        match level {
            Level::Unset | Level::Debug => Color::White,
            Level::Info => Color::Blue,
            Level::Warn => Color::Yellow,
            Level::Error | Level::Fatal => Color::Red,
        }
    }

    /// Render one entry without the trailing newline
    pub fn format(&self, entry: &Entry) -> String {
        let use_color = self.uses_color();
        let timestamp: DateTime<Local> = DateTime::from(entry.timestamp);
        let label = Self::level_label(entry.level);

        let mut line = String::with_capacity(64 + entry.message.len());
        let _ = write!(line, "{}", timestamp.format(&self.time_format));
        if use_color {
            let color = Self::level_color(entry.level);
            let _ = write!(line, " |\x1b[{}m{:>5}\x1b[0m| ", color.to_fg_str(), label);
        } else {
            let _ = write!(line, " |{:>5}| ", label);
        }
        line.push_str(&entry.message);

        for (name, value) in entry.fields.iter().filter(|(k, _)| *k != SERVICE_FIELD) {
            if use_color {
                let color = if name == "error" { Color::Red } else { Color::Green };
                let _ = write!(line, " \x1b[{}m{:>6}\x1b[0m={}", color.to_fg_str(), name, value);
            } else {
                let _ = write!(line, " {:>6}={}", name, value);
            }
        }

        line
    }
}

impl Default for TextHandler {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Handler for TextHandler {
    fn handle(&self, entry: &Entry) -> Result<()> {
        let line = self.format(entry);

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Fields};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn entry(level: Level, message: &str, fields: Fields) -> Entry {
        Entry::new(fields, level, message.to_string())
    }

    #[test]
    fn test_plain_layout() {
        let handler = TextHandler::new(std::io::sink()).with_time_format("TS");
        let fields = Fields::from([("status", FieldValue::from(200)), ("method", "GET".into())]);

        let line = handler.format(&entry(Level::Info, "served", fields));
        assert_eq!(line, "TS | INFO| served method=GET status=200");
    }

    #[test]
    fn test_short_field_names_are_padded() {
        let handler = TextHandler::new(std::io::sink()).with_time_format("TS");
        let fields = Fields::from([("id", 7)]);

        let line = handler.format(&entry(Level::Error, "failed", fields));
        assert_eq!(line, "TS |ERROR| failed     id=7");
    }

    #[test]
    fn test_service_field_is_skipped() {
        let handler = TextHandler::new(std::io::sink()).with_time_format("TS");
        let fields = Fields::from([("service", "api"), ("user", "ann")]);

        let line = handler.format(&entry(Level::Warn, "slow", fields));
        assert_eq!(line, "TS | WARN| slow   user=ann");
        assert!(!line.contains("api"));
    }

    #[test]
    fn test_auto_color_on_plain_writer_is_off() {
        let handler = TextHandler::new(std::io::sink());
        assert!(!handler.uses_color());

        let line = handler.format(&entry(Level::Info, "x", Fields::new()));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_forced_color() {
        let handler = TextHandler::new(std::io::sink())
            .with_color_mode(ColorMode::Force)
            .with_time_format("TS");
        let fields = Fields::from([("error", "boom"), ("path", "/tmp")]);

        let line = handler.format(&entry(Level::Info, "x", fields));
        assert!(line.starts_with("TS |\x1b[34m INFO\x1b[0m| x"));
        assert!(line.contains("\x1b[31m error\x1b[0m=boom"));
        assert!(line.contains("\x1b[32m  path\x1b[0m=/tmp"));
    }

    #[test]
    fn test_forced_debug_color_is_ansi_37() {
        let handler = TextHandler::new(std::io::sink())
            .with_color_mode(ColorMode::Force)
            .with_time_format("TS");

        let line = handler.format(&entry(Level::Debug, "x", Fields::new()));
        assert_eq!(line, "TS |\x1b[37mDEBUG\x1b[0m| x");
    }

    #[test]
    fn test_never_color() {
        let handler = TextHandler::new(std::io::sink()).with_color_mode(ColorMode::Never);
        let line = handler.format(&entry(Level::Fatal, "x", Fields::new()));
        assert!(!line.contains('\x1b'));
        assert!(line.contains("|FATAL| x"));
    }

    #[test]
    fn test_handle_writes_one_line_per_entry() {
        let buffer = SharedBuffer::default();
        let handler = TextHandler::new(buffer.clone()).with_time_format("TS");

        handler.handle(&entry(Level::Debug, "first", Fields::new())).unwrap();
        handler.handle(&entry(Level::Info, "second", Fields::new())).unwrap();

        assert_eq!(buffer.contents(), "TS |DEBUG| first\nTS | INFO| second\n");
    }

    #[test]
    fn test_default_time_format() {
        let handler = TextHandler::new(std::io::sink());
        let line = handler.format(&entry(Level::Info, "x", Fields::new()));

        // e.g. "2025/01/08 10:30:45 +0000"
        let timestamp = line.split(" |").next().unwrap();
        assert_eq!(timestamp.len(), 25, "unexpected timestamp {:?}", timestamp);
        assert_eq!(&timestamp[4..5], "/");
    }
}
