//! Error types for Scribo operations.
//!
//! The text pipeline itself never fails; degenerate input yields zero counts.
//! [`ScriboError`] covers the collaborators around it: configuration
//! validation, source fetching, file I/O, the key-value store and the
//! content services.
//!
//! # Example
//!
//! ```rust
//! use scribo_core::{ReflowConfig, ScriboError};
//!
//! let config = ReflowConfig { min_words: 500, max_words: 100 };
//! assert!(matches!(config.validate(), Err(ScriboError::ConfigError(_))));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Scribo operations.
#[derive(Error, Debug)]
pub enum ScriboError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues
    /// and non-success responses from the source API.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The source API has no content for the requested topic.
    #[error("No source content found for topic: {0}")]
    TopicNotFound(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration, e.g. a word budget whose minimum exceeds its maximum.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Key-value store failures that are not plain I/O.
    #[error("Store error: {0}")]
    StoreError(String),

    /// Content service (summarizer / voice synthesis) failures.
    #[error("Content service error: {0}")]
    ServiceError(String),
}

/// Result type alias for ScriboError.
pub type Result<T> = std::result::Result<T, ScriboError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScriboError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_topic_not_found_error() {
        let err = ScriboError::TopicNotFound("Xyzzy".to_string());
        assert!(err.to_string().contains("Xyzzy"));
    }

    #[test]
    fn test_timeout_error() {
        let err = ScriboError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ScriboError = io.into();
        assert!(matches!(err, ScriboError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
