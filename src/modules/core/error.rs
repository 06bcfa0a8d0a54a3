//! Error types for Roster

use roster_types::wire::error_codes;
use thiserror::Error;

/// Main error type for Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Settings file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset could not be read or is structurally invalid
    #[error("Dataset load error: {0}")]
    Load(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
}

/// Rejection of an untrusted search parameter
///
/// Only the fixed code is ever reported to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("limit must be an integer greater than zero")]
    BadLimit,

    #[error("offset must be a non-negative integer")]
    BadOffset,

    #[error("order_field must be one of Id, Age, Name")]
    BadOrderField,

    #[error("order_by must be one of -1, 0, 1")]
    BadOrderBy,
}

impl ValidationError {
    /// Wire code for this rejection
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::BadLimit => error_codes::BAD_LIMIT,
            ValidationError::BadOffset => error_codes::BAD_OFFSET,
            ValidationError::BadOrderField => error_codes::BAD_ORDER_FIELD,
            ValidationError::BadOrderBy => error_codes::BAD_ORDER_BY,
        }
    }

    pub fn status_code(&self) -> u16 {
        400
    }
}

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_codes() {
        assert_eq!(ValidationError::BadLimit.code(), "BadLimit");
        assert_eq!(ValidationError::BadOffset.code(), "BadOffset");
        assert_eq!(ValidationError::BadOrderField.code(), "BadOrderField");
        assert_eq!(ValidationError::BadOrderBy.code(), "BadOrderBy");
    }

    #[test]
    fn test_validation_status_code() {
        assert_eq!(ValidationError::BadOrderBy.status_code(), 400);
    }

    #[test]
    fn test_error_display() {
        let err = RosterError::Load("bad xml".into());
        assert_eq!(err.to_string(), "Dataset load error: bad xml");
    }
}
