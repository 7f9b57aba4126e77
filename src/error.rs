//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Network failure, or a response body that could not be decoded as JSON.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server reported a failure, or the response envelope was missing
    /// its success field. Carries the server's `message` when one was sent,
    /// otherwise the operation's default text.
    #[error("{0}")]
    Api(String),

    /// Failure carrying the HTTP status code. Raised only by token
    /// validation, so callers can branch on 401 to redirect to login.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
}

impl SdkError {
    /// The HTTP status for status-coded errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
