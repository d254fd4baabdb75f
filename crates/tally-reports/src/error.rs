//! Error types for report API operations.

use thiserror::Error;

/// Errors that can occur during report API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a status outside the accepted set.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, when readable.
        body: String,
    },

    /// A well-formed envelope signalling failure.
    #[error("backend error: {message}")]
    Backend {
        /// Error message from the backend.
        message: String,
    },

    /// The response body was not a valid envelope.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// The result payload did not match the expected shape.
    #[error("invalid payload shape: {0}")]
    InvalidShape(String),

    /// Failed to serialize a request payload.
    #[error("request serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for report API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
