//! Error types for mailfrom.

use thiserror::Error;

/// Common error type for mailfrom.
#[derive(Error, Debug)]
pub enum MailfromError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the database
    /// backend. Errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for MailfromError {
    fn from(e: sqlx::Error) -> Self {
        MailfromError::Database(e.to_string())
    }
}

/// Result type alias for mailfrom operations.
pub type Result<T> = std::result::Result<T, MailfromError>;
