//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized level token
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// A handler could not deliver an entry
    #[error("Delivery failed in {handler} handler: {message}")]
    Delivery { handler: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid level error for the rejected token
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create a delivery error attributed to a handler
    pub fn delivery(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Delivery {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// True for errors raised while parsing a level token
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, LoggerError::InvalidLevel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("verbose");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
        assert!(err.is_invalid_level());

        let err = LoggerError::delivery("text", "broken pipe");
        assert!(matches!(err, LoggerError::Delivery { .. }));
        assert!(!err.is_invalid_level());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "Invalid log level: 'verbose'");

        let err = LoggerError::delivery("json", "disk full");
        assert_eq!(err.to_string(), "Delivery failed in json handler: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
