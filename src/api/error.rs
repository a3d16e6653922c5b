//! API error types

use thiserror::Error;

/// Errors raised by the resource services.
///
/// Views do not distinguish between these; any of them ends up as the
/// generic error message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response not read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL or a path could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The operation needs a logged-in principal
    #[error("Not logged in")]
    NotLoggedIn,
}

impl ApiError {
    /// HTTP status of a backend rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
