//! Handler error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::StatusReply;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("request body too large")]
    PayloadTooLarge,
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "Data store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::BadRequest(detail) => {
                tracing::debug!(detail = %detail, "Rejected request body");
                (StatusCode::BAD_REQUEST, "Invalid request body.")
            }
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large."),
        };
        (status, Json(StatusReply::fail(message))).into_response()
    }
}
