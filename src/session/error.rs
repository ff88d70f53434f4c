//! Session error types

use thiserror::Error;

/// Errors that can occur while managing the session
#[derive(Error, Debug)]
pub enum SessionError {
    /// The key-value store could not be reached at all
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Writing or removing the persisted record failed (quota, read-only, ...)
    #[error("Storage write failed: {0}")]
    Write(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A required form field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The authenticator refused the credentials
    #[error("Authentication rejected: {0}")]
    Rejected(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}

impl SessionError {
    /// Text shown to the user. Failures carry no detail.
    pub fn user_message(&self) -> &'static str {
        "Please check your credentials and try again."
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
