//! API client error types.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, or body decoding).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The request payload failed local validation and was never sent.
    #[error("Invalid request payload: {0}")]
    Validation(String),
}

impl ApiError {
    /// Returns the HTTP status code, if the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Validation(_) => None,
        }
    }
}
