//! Service error taxonomy and its HTTP mapping.
//!
//! Handlers return [`AppResult`]; every error becomes a JSON body of the
//! shape `{"error": "..."}` with the matching status code. Pipeline and
//! client code below the HTTP layer stays on `anyhow::Result` and is folded
//! into [`AppError::Internal`] at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing or malformed input. 400.
    #[error("{0}")]
    Validation(String),

    /// No usable credential on the request. 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Credential present but not the admin token. 403.
    #[error("{0}")]
    Forbidden(String),

    /// Translation API failures, store failures, and anything unexpected. 500.
    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} renders the context chain in one line, no backtrace
        AppError::Internal(format!("{:#}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            AppError::Internal(message) => {
                error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
