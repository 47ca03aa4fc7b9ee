//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use shopfront_core::error::{AppError, ErrorKind};

/// Message returned in place of any server-side failure.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Request body rejected");
        Self(AppError::validation("Invalid request body"))
    }
}

/// Status code for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::InvalidCredentials | ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Database | ErrorKind::Internal | ErrorKind::Configuration => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let message = if err.kind.is_server_side() {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
            INTERNAL_MESSAGE.to_string()
        } else {
            err.message
        };

        let code = match err.kind {
            ErrorKind::Database | ErrorKind::Configuration => ErrorKind::Internal.to_string(),
            kind => kind.to_string(),
        };

        (status, Json(ApiErrorResponse { error: message, code })).into_response()
    }
}
