//! Client error types

use thiserror::Error;

/// Typed failure of a search call
///
/// Nothing is retried internally; callers decide what to do with each kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Limit was zero or negative, rejected before sending
    #[error("limit must be greater than zero")]
    BadLimit,

    /// Offset was negative, rejected before sending
    #[error("offset must not be negative")]
    BadOffset,

    /// No response within the client timeout
    #[error("request timed out")]
    Timeout,

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    TransportError(String),

    /// Service rejected the access token
    #[error("bad access token")]
    Unauthorized,

    /// Service rejected a parameter with the given code
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Body could not be decoded
    #[error("cannot decode response: {0}")]
    BadResponse(String),

    /// Any other non-success status
    #[error("unexpected response status {0}")]
    UnknownError(u16),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::TransportError(err.to_string())
        }
    }
}
