//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::booking::ValidationError;
use crate::config::ConfigError;
use crate::notify::{DispatchError, NotifyError, ReasonCode, Step};
use crate::session::SessionError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session exists but is logged out
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The same booking is already being sent
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Idempotency key already bound to a different booking
    #[error("Key reused: {0}")]
    KeyReused(String),

    /// A notification could not be delivered
    #[error("{}", .error.user_message())]
    Delivery { step: Step, error: NotifyError },

    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
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
    /// Structured reason for delivery failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,
    /// Failed notification step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::InFlight(_) => ApiError::Conflict(err.user_message()),
            DispatchError::KeyMismatch(_) => ApiError::KeyReused(err.user_message()),
            DispatchError::Step { step, error } => ApiError::Delivery { step, error },
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) | SessionError::Dashboard(_) => {
                ApiError::NotFound(err.to_string())
            }
            SessionError::NotLoggedIn => ApiError::Unauthorized(err.to_string()),
            SessionError::Login(e) => ApiError::Validation(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "NOT_LOGGED_IN"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "ALREADY_SENDING"),
            ApiError::KeyReused(_) => (StatusCode::UNPROCESSABLE_ENTITY, "IDEMPOTENCY_KEY_REUSED"),
            ApiError::Delivery { .. } => (StatusCode::BAD_GATEWAY, "DELIVERY_FAILED"),
            ApiError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let (reason, step) = match &self {
            ApiError::Delivery { step, error } => (Some(error.reason), Some(*step)),
            _ => (None, None),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
                reason,
                step,
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
