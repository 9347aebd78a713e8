//! HTTP error mapping.
//!
//! Every failure is rendered as `{"detail": "..."}` with a status code
//! chosen by variant.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cognify_domain::ValidationError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body missing, malformed or out of range (422)
    #[error("{0}")]
    Validation(String),

    /// Request understood but unusable, e.g. a non-PDF upload (400)
    #[error("{0}")]
    BadRequest(String),

    /// Upstream generation or extraction failure (500)
    #[error("{0}")]
    Internal(String),

    /// Rejection raised while streaming a multipart body
    #[error("{detail}")]
    Upload { status: StatusCode, detail: String },
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    detail: String,
}

impl ApiError {
    pub fn internal<E: std::fmt::Display>(err: E) -> Self {
        Self::Internal(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upload { status, .. } => *status,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::Upload {
            status: err.status(),
            detail: err.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Upload {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let payload = ErrorPayload {
            detail: self.to_string(),
        };
        (status, Json(payload)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_variant() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let err = ApiError::from(ValidationError::QuestionCountOutOfRange {
            min: 1,
            max: 15,
            actual: 0,
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("num_questions"));
    }
}
