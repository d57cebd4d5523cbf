//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use healthy_diary_shared::types::{ErrorDetail, ErrorResponse};
use healthy_diary_shared::validation::ValidationError;
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Storage error")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Validation failure not tied to a single field
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation {
            message: err.user_message(),
            field: Some(err.field),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first failing field; the map order is not stable so sort
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.first() {
            Some((field, errs)) => {
                let detail = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "값이 허용 범위를 벗어났습니다".to_string());
                ValidationError::new(&field.to_string(), &detail).into()
            }
            None => ApiError::validation(errors.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match self {
            ApiError::Validation { message, field } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            ApiError::Storage(err) => {
                error!("Storage error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to access diary storage".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use healthy_diary_shared::types::AddWaterLogRequest;
    use healthy_diary_shared::validation::{check_field, validate_calories};
    use rstest::rstest;
    use validator::Validate;

    fn storage_error() -> ApiError {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        ApiError::from(StorageError::from(io))
    }

    #[rstest]
    #[case::validation(ApiError::validation("Invalid input"), StatusCode::BAD_REQUEST)]
    #[case::bad_request(ApiError::BadRequest("bad".to_string()), StatusCode::BAD_REQUEST)]
    #[case::not_found(ApiError::NotFound("Diet record not found".to_string()), StatusCode::NOT_FOUND)]
    #[case::storage(storage_error(), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn test_field_validation_keeps_field() {
        let err = check_field("calories", validate_calories(-10.0)).unwrap_err();
        match ApiError::from(err) {
            ApiError::Validation { field, message } => {
                assert_eq!(field.as_deref(), Some("calories"));
                assert!(message.starts_with("칼로리:"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validator_errors_convert() {
        let req = AddWaterLogRequest {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount_ml: 0,
        };
        let errors = req.validate().unwrap_err();
        match ApiError::from(errors) {
            ApiError::Validation { field, message } => {
                assert_eq!(field.as_deref(), Some("amount_ml"));
                assert!(message.starts_with("수분량:"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
