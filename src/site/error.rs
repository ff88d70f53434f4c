//! Site Server Error Types
//!
//! Conversion of server failures into JSON responses with a request id.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Site server errors
#[derive(Error, Debug)]
pub enum SiteError {
    /// The dist directory has no `index.html`
    #[error("App shell unavailable at {path:?}: {error}")]
    MissingIndex { path: PathBuf, error: String },

    /// Bind address could not be built from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Listener or server failure
    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl SiteError {
    fn code(&self) -> &'static str {
        match self {
            SiteError::MissingIndex { .. } => "APP_SHELL_MISSING",
            SiteError::Config(_) => "CONFIG_ERROR",
            SiteError::Server(_) => "INTERNAL_ERROR",
            SiteError::Io(_) => "IO_ERROR",
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let code = self.code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Site error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for site server operations
pub type SiteResult<T> = Result<T, SiteError>;
