//! Provider error types and handling
//!
//! These errors never escape an adapter: they are converted into
//! [`GenerationResult::failure`](crate::protocol::GenerationResult::failure)
//! at the adapter boundary.

use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur when interacting with LLM providers
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Vendor answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http {
        status: u16,
        /// Error message extracted from the response body, if any
        detail: Option<String>,
    },

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout occurred
    #[error("Request timed out")]
    Timeout,

    /// The response envelope is missing an expected field or is not JSON
    #[error("Invalid response: {0}")]
    Envelope(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Serialization(String),

    /// The response body exceeded the size limit
    #[error("Response size {size} exceeds maximum {max}")]
    ResponseTooLarge { size: usize, max: usize },

    /// The adapter could not be set up (bad URL, client build failure)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_connect() {
            ProviderError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            ProviderError::Envelope(err.to_string())
        } else if err.is_builder() {
            ProviderError::Configuration(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Envelope(err.to_string())
    }
}

impl From<url::ParseError> for ProviderError {
    fn from(err: url::ParseError) -> Self {
        ProviderError::Configuration(format!("Invalid endpoint URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = ProviderError::Http {
            status: 429,
            detail: Some("quota".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 429");
    }

    #[test]
    fn test_json_error_is_envelope() {
        let err: ProviderError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, ProviderError::Envelope(_)));
        assert!(err.to_string().starts_with("Invalid response:"));
    }
}
