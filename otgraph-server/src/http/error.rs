//! API error type with IntoResponse.
//!
//! Dispatch and repository failures are converted to JSON responses with
//! appropriate status codes. Storage detail is logged server-side and never
//! echoed to clients; validation and constraint failures name the rejected
//! input.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::graph::GraphError;

/// API error type with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed inbound identifier or input shape (400).
    Validation { message: String },

    /// Requested row or relation target does not exist (404).
    NotFound { resource: &'static str, id: String },

    /// Storage rejected a write due to referential/uniqueness constraints
    /// (409).
    Conflict { message: String },

    /// Connection/pool failure, timeout, cancellation (500, logged).
    Storage(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": message
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Conflict { message } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "constraint_violation",
                    "message": message
                }),
            ),
            Self::Storage(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Constraint { .. } => Self::Conflict {
                message: e.to_string(),
            },
            DbError::Storage { .. } => Self::Storage(e),
        }
    }
}

impl From<GraphError> for ApiError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::InvalidId { .. } => Self::Validation {
                message: e.to_string(),
            },
            GraphError::Db(db) => db.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_id_is_400() {
        let err = ApiError::from(GraphError::InvalidId {
            entity: "account",
            value: "abc".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(DbError::not_found("town", 9));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn constraint_is_409() {
        let err = ApiError::from(DbError::Constraint {
            operation: "create account",
            detail: "Duplicate entry 'newuser' for key 'name'".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn storage_is_500() {
        let err = ApiError::from(DbError::from_sqlx("get account", sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
