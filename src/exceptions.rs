//! Error types for the label tooling

use std::fmt;

/// Main error type for label operations
#[derive(Debug)]
pub enum LabelError {
    /// Rendering configuration rejected (dimensions, margins, colors)
    InvalidConfig(String),

    /// Raster surface could not be created or drawn on
    Surface(String),

    /// PNG encoding failed
    Encoding(String),

    /// IO error
    IoError(std::io::Error),

    /// JSON parsing error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::InvalidConfig(msg) => write!(f, "Invalid config: {msg}"),
            LabelError::Surface(msg) => write!(f, "Surface error: {msg}"),
            LabelError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            LabelError::IoError(err) => write!(f, "IO error: {err}"),
            LabelError::JsonError(err) => write!(f, "JSON error: {err}"),
            LabelError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LabelError {}

impl From<std::io::Error> for LabelError {
    fn from(err: std::io::Error) -> Self {
        LabelError::IoError(err)
    }
}

impl From<serde_json::Error> for LabelError {
    fn from(err: serde_json::Error) -> Self {
        LabelError::JsonError(err)
    }
}

impl From<anyhow::Error> for LabelError {
    fn from(err: anyhow::Error) -> Self {
        // Alternate form keeps the whole context chain
        LabelError::Generic(format!("{err:#}"))
    }
}

/// Result type for label operations
pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = LabelError::InvalidConfig("width must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid config: width must be positive");

        let err = LabelError::Generic("plain".to_string());
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LabelError = io.into();
        assert!(matches!(err, LabelError::IoError(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: LabelError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        use anyhow::Context;

        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let err: LabelError = result.context("Failed to keep print view").unwrap_err().into();

        assert!(matches!(err, LabelError::Generic(_)));
        assert_eq!(err.to_string(), "Failed to keep print view: read-only");
    }
}
