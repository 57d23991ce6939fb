//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry.
///
/// `Unset` sorts below every real level and only marks a logger that inherits
/// its threshold from its parent. It is never used to filter messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    #[default]
    Unset = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    /// The five levels a message can be logged at, lowest first.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Unset => "unset",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Parse a level token. `"warning"` is accepted as an alias for `"warn"`.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, Level::Unset)
    }

    /// Decode a level from configuration text.
    ///
    /// Empty input leaves the current value untouched. On a parse error the
    /// value is also left untouched.
    pub fn set_from_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        *self = Level::parse(text)?;
        Ok(())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Level::parse(s)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Level::parse(&token).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_strings() {
        assert_eq!(Level::Debug.to_string(), "debug");
        assert_eq!(Level::Info.to_string(), "info");
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Fatal.to_string(), "fatal");
    }

    #[test]
    fn test_parse_warning_alias() {
        assert_eq!(Level::parse("warning").unwrap(), Level::Warn);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for token in ["", "unset", "trace", "INFO", "Warn", " info", "critical"] {
            let err = Level::parse(token).unwrap_err();
            assert!(err.is_invalid_level(), "accepted {:?}", token);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Unset < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert_eq!(Level::default(), Level::Unset);
    }

    #[test]
    fn test_serialize_json() {
        #[derive(Serialize)]
        struct Config {
            level: Level,
        }

        let json = serde_json::to_string(&Config { level: Level::Debug }).unwrap();
        assert_eq!(json, r#"{"level":"debug"}"#);
    }

    #[test]
    fn test_deserialize_json() {
        #[derive(Deserialize)]
        struct Config {
            level: Level,
        }

        let config: Config = serde_json::from_str(r#"{"level":"warning"}"#).unwrap();
        assert_eq!(config.level, Level::Warn);

        assert!(serde_json::from_str::<Config>(r#"{"level":"loud"}"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{"level":""}"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{"level":3}"#).is_err());
    }

    #[test]
    fn test_set_from_text() {
        let mut level = Level::Info;

        level.set_from_text("").unwrap();
        assert_eq!(level, Level::Info);

        level.set_from_text("error").unwrap();
        assert_eq!(level, Level::Error);

        assert!(level.set_from_text("nope").is_err());
        assert_eq!(level, Level::Error);
    }
}
