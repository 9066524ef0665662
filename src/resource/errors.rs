//! # Resource Errors
//!
//! The error taxonomy for the generic CRUD surface, mapped to HTTP statuses:
//! unknown kind and missing record are 404, validation failures are 422,
//! an unavailable store is 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors surfaced by the generic resource handler
#[derive(Debug, Clone, Error)]
pub enum ResourceError {
    /// Resource name not in the fixed registry; checked before any store access
    #[error("Unknown resource: {0}")]
    UnknownKind(String),

    /// Kind is valid but no record matched the id
    #[error("Item not found")]
    NotFound,

    /// Create payload failed schema validation
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Store failure on a write path
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ResourceError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::UnknownKind(_) => StatusCode::NOT_FOUND,
            ResourceError::NotFound => StatusCode::NOT_FOUND,
            ResourceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ResourceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ResourceError> for ErrorResponse {
    fn from(err: ResourceError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ResourceError::UnknownKind("widgets".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ResourceError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ResourceError::Validation(SchemaError::MissingField("name".into())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ResourceError::Store(StoreError::Unavailable).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_detail_carried_through() {
        let err = ResourceError::Validation(SchemaError::MissingField("name".into()));
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, 422);
        assert!(body.error.contains("name"));
    }
}
