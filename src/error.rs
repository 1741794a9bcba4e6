//! Error types for unit-test-summary

use std::io;
use thiserror::Error;

/// Result type alias for unit-test-summary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for unit-test-summary
///
/// Aggregation and rendering never fail; these cover the edges that read
/// configuration and input files.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The locale name is malformed or its digit grouping is not known.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Failed to interpret input data.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input was not valid JSON or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error with custom message.
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedLocale("xx_XX".to_string());
        assert_eq!(err.to_string(), "Unsupported locale: xx_XX");
    }

    #[test]
    fn test_error_from_string() {
        let err: Error = "custom error".into();
        assert_eq!(err.to_string(), "custom error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
