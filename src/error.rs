use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use queries::StoreError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// Create under a parent that doesn't exist. Reported as 404.
    #[error("{0}")]
    ParentMissing(String),

    #[error("{0}")]
    ValidationFailed(String),

    /// The id is taken; the body is the stored entity.
    #[error("already exists")]
    Conflict(serde_json::Value),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn conflict<T: Serialize>(existing: &T) -> Self {
        match serde_json::to_value(existing) {
            Ok(value) => ApiError::Conflict(value),
            Err(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::ValidationFailed(err.0)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationFailed(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingParent(id) => {
                ApiError::ParentMissing(format!("Parent {} doesn't exist", id))
            }
            StoreError::Database(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) | ApiError::ParentMissing(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ValidationFailed(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(existing) => return (StatusCode::CONFLICT, Json(existing)).into_response(),
            ApiError::Database(ref e) => {
                error!("Error in database connection: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(ref msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::ParentMissing("x".into()), StatusCode::NOT_FOUND),
            (ApiError::ValidationFailed("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Conflict(json!({"id": "x"})), StatusCode::CONFLICT),
            (ApiError::Database(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn store_missing_parent_maps_to_parent_missing() {
        let err: ApiError = StoreError::MissingParent("abc".into()).into();
        assert!(matches!(err, ApiError::ParentMissing(ref m) if m.contains("abc")));
    }
}
