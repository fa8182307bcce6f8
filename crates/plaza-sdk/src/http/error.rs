/*
[INPUT]:  Error sources (HTTP, API, serialization, auth, signing)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Plaza SDK
#[derive(Error, Debug)]
pub enum PlazaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Missing required construction parameter
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed private key supplied to the local adapter
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// External wallet client is missing required fields
    #[error("Wallet adapter unavailable: {0}")]
    AdapterUnavailable(String),

    /// Nonce endpoint returned a non-success status
    #[error("Nonce request failed with status {status}")]
    NonceRequest { status: u16 },

    /// Underlying signer rejected or the user declined
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Operation exceeded its deadline
    #[error("Timed out after {duration}s")]
    Timeout { duration: u64 },
}

impl PlazaError {
    /// Check if the error is retryable
    ///
    /// A retry of the auth flow always starts from a fresh nonce; stale
    /// nonces are rejected server-side.
    pub fn is_retryable(&self) -> bool {
        match self {
            PlazaError::Http(_) | PlazaError::Timeout { .. } | PlazaError::InvalidResponse(_) => {
                true
            }
            PlazaError::NonceRequest { status } | PlazaError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Check if error indicates a problem with the signing setup
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            PlazaError::Signing(_)
                | PlazaError::AdapterUnavailable(_)
                | PlazaError::InvalidPrivateKey(_)
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        PlazaError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for Plaza SDK operations
pub type Result<T> = std::result::Result<T, PlazaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let timeout_err = PlazaError::Timeout { duration: 30 };
        assert!(timeout_err.is_retryable());

        assert!(PlazaError::NonceRequest { status: 503 }.is_retryable());
        assert!(!PlazaError::NonceRequest { status: 400 }.is_retryable());
        assert!(!PlazaError::Signing("declined".to_string()).is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(PlazaError::Signing("declined".to_string()).is_auth_error());
        assert!(PlazaError::AdapterUnavailable("no address".to_string()).is_auth_error());
        assert!(!PlazaError::Timeout { duration: 30 }.is_auth_error());
        assert!(!PlazaError::NonceRequest { status: 500 }.is_auth_error());
    }

    #[test]
    fn test_api_error_creation() {
        let err = PlazaError::api_error(StatusCode::BAD_REQUEST, "Invalid wallet address");
        match err {
            PlazaError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid wallet address");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
