//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::almanac::AlmanacError;
use crate::services::BuildError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Almanac lookup failed
    Almanac(AlmanacError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) | AppError::Almanac(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) | AppError::Internal(msg) => f.write_str(msg),
            AppError::Almanac(e) => write!(f, "{}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Almanac(e) = &self {
            tracing::error!(transient = e.is_transient(), "Almanac lookup failed: {}", e);
        }
        (status, Json(ApiError::new(self.to_string()))).into_response()
    }
}

impl From<AlmanacError> for AppError {
    fn from(err: AlmanacError) -> Self {
        AppError::Almanac(err)
    }
}

impl From<BuildError> for AppError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Almanac(e) => AppError::Almanac(e),
            BuildError::Task(msg) => AppError::Internal(msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::from(AlmanacError::Status(503)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_almanac_message_is_kept() {
        let err = AppError::from(BuildError::Almanac(AlmanacError::Status(503)));
        assert_eq!(err.to_string(), "almanac service returned status 503");
    }
}
