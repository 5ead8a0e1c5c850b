use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::assessments::core::errors::AssessmentError;
use crate::modules::consultations::core::errors::BookingError;
use crate::modules::directory::use_cases::resolve_caller::handler::AuthError;
use crate::modules::workshops::core::errors::WorkshopError;

/// Every failure an HTTP handler can surface, mapped to a status once.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredential => ApiError::Unauthorized(error.to_string()),
            AuthError::NotRegistered | AuthError::Forbidden(_) => {
                ApiError::Forbidden(error.to_string())
            }
            AuthError::Unexpected(message) => ApiError::Internal(message),
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(error: BookingError) -> Self {
        match error {
            BookingError::Auth(auth) => auth.into(),
            BookingError::Validation(_) | BookingError::AlreadyBooked | BookingError::SlotTaken => {
                ApiError::BadRequest(error.to_string())
            }
            BookingError::NotFound => ApiError::NotFound(error.to_string()),
            BookingError::Backend(message) => ApiError::Internal(message),
        }
    }
}

impl From<WorkshopError> for ApiError {
    fn from(error: WorkshopError) -> Self {
        match error {
            WorkshopError::NotFound => ApiError::NotFound(error.to_string()),
            WorkshopError::AlreadyRegistered | WorkshopError::LimitReached { .. } => {
                ApiError::Conflict(error.to_string())
            }
            WorkshopError::Backend(message) => ApiError::Internal(message),
        }
    }
}

impl From<AssessmentError> for ApiError {
    fn from(error: AssessmentError) -> Self {
        match error {
            AssessmentError::Validation(_) => ApiError::BadRequest(error.to_string()),
            AssessmentError::NotFound => ApiError::NotFound(error.to_string()),
            AssessmentError::AlreadyCompleted | AssessmentError::GiftAlreadyReceived => {
                ApiError::Conflict(error.to_string())
            }
            AssessmentError::Backend(message) => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
