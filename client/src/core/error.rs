//! # Common Error Types
//!
//! Consolidated error handling for the swap desk client.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (DNS, refused, reset)
//! - **Http**: the API answered with a non-2xx status
//! - **Parse**: a response body could not be decoded
//! - **Config**: invalid configuration at startup
//! - **Storage**: the local token store could not be read or written
//!
//! Async tasks hand errors to the UI thread as `String` (see
//! [`crate::app::AppEvent`]), the same way the rest of the event plumbing does.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure, no HTTP response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The API rejected the request.
    ///
    /// `message` is the `error` field of the response body when the API sent
    /// one, otherwise the canonical reason phrase of the status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
