//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use wildfire_core::PredictionError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Resource errors
    #[error("not found: {0}")]
    NotFound(String),

    // Validation errors
    #[error("validation failed: {0}")]
    ValidationError(String),

    // Model errors
    #[error("prediction unavailable: {0}")]
    PredictionUnavailable(String),

    #[error("prediction failed: {0}")]
    PredictionFailed(String),

    // Generic errors
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::PredictionUnavailable(msg) => {
                tracing::warn!("Prediction requested while model unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Prediction unavailable: model or scaler not loaded")
            }
            AppError::PredictionFailed(msg) => {
                tracing::error!("Prediction failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::ResourceUnavailable(msg) => AppError::PredictionUnavailable(msg),
            PredictionError::InvocationFailure(msg) => AppError::PredictionFailed(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(err.to_string())
    }
}
