//! Error types for the JSON-RPC client

use thiserror::Error;

/// Errors that can occur when calling the monitoring API
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Endpoint answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// JSON-RPC error object in the response
    #[error("RPC error {code}: {message} {data}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Short error message
        message: String,
        /// Extended description, empty if absent
        data: String,
    },

    /// Response carried neither `result` nor `error`
    #[error("response has no result")]
    MissingResult,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
