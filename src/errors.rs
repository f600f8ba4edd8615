//! Error types for rapid_summarize
//!
//! This module defines the error types used throughout the library.
//! All errors are designed to be informative and actionable.
//!
//! The summarization core itself is total over string input and never
//! fails; these errors model the surrounding collaborators (URL
//! validation, page fetching, content extraction, configuration).

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for rapid_summarize
#[derive(Error, Debug, Clone)]
pub enum SummarizeError {
    /// The supplied value does not look like an http(s) URL
    #[error("Invalid URL: {url} (expected an address starting with http:// or https://)")]
    InvalidUrl { url: String },

    /// The page could not be fetched (network failure, non-success status)
    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    /// Too little text survived extraction to produce a summary
    #[error("Insufficient content: got {words} words, need at least {minimum}")]
    InsufficientContent { words: usize, minimum: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummarizeError {
    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create an insufficient content error
    pub fn insufficient_content(words: usize, minimum: usize) -> Self {
        Self::InsufficientContent { words, minimum }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from the fetch/extraction collaborator
    /// rather than from configuration
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::Fetch { .. } | Self::InsufficientContent { .. }
        )
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizeError::invalid_url("ftp://example.com");
        assert!(err.to_string().contains("Invalid URL"));
        assert!(err.to_string().contains("ftp://example.com"));

        let err = SummarizeError::insufficient_content(12, 20);
        assert!(err.to_string().contains("12 words"));
        assert!(err.to_string().contains("at least 20"));
    }

    #[test]
    fn test_is_fetch_failure() {
        assert!(SummarizeError::fetch("timed out").is_fetch_failure());
        assert!(SummarizeError::invalid_url("not-a-url").is_fetch_failure());
        assert!(SummarizeError::insufficient_content(3, 20).is_fetch_failure());
        assert!(!SummarizeError::invalid_config("bad").is_fetch_failure());
    }
}
