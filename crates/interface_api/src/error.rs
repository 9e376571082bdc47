//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::{PortError, TemporalError};
use domain_car::CarError;
use domain_claims::ClaimError;

/// API error types
///
/// The display text of each variant is exactly the body sent to the client.
/// Client errors (`NotFound`, `BadRequest`, `Validation`) are answered with
/// the bare message as `text/plain`; an empty `NotFound` message yields an
/// empty body. Server-side failures use the JSON [`ErrorResponse`] envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    Database(String),
}

/// Error response body for conflicts and server-side failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(message) => return (StatusCode::NOT_FOUND, message.clone()).into_response(),
            ApiError::BadRequest(message) | ApiError::Validation(message) => {
                return (StatusCode::BAD_REQUEST, message.clone()).into_response()
            }
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };

        if status.is_server_error() {
            error!(error = %self, kind = error_type, "Request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Validation { message, .. } => ApiError::Validation(message),
            PortError::Conflict { message } => ApiError::Conflict(message),
            PortError::Connection { message, .. } => ApiError::Database(message),
            PortError::Internal { message, .. } => ApiError::Internal(message),
        }
    }
}

impl From<CarError> for ApiError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::CarNotFound(_) => ApiError::NotFound(err.to_string()),
            CarError::PolicyNotFound(_) => ApiError::NotFound(String::new()),
            CarError::PolicyCarNotFound(_) => ApiError::BadRequest(err.to_string()),
            CarError::Port(e) => e.into(),
        }
    }
}

impl From<TemporalError> for ApiError {
    fn from(err: TemporalError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
