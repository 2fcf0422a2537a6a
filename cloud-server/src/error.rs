//! Error handling
//!
//! Detection failures are reported as findings, never as errors.
//! Only infrastructure failures end up here.

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Blocking load/detect task failed to complete
    TaskFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::TaskFailed(msg) => {
                tracing::error!("Detection task failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Detection task failed")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::TaskFailed(err.to_string())
    }
}
