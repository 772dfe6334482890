//! Repository error taxonomy.
//!
//! Every repository failure carries the operation that produced it. Storage
//! errors are split into constraint violations (the schema rejected a write)
//! and everything else (pool exhaustion, timeouts, cancellation, protocol
//! errors), so callers can answer "was the input bad?" without parsing
//! driver messages.

use sqlx::error::ErrorKind;

/// Database error type shared by all repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violated during {operation}: {detail}")]
    Constraint {
        operation: &'static str,
        detail: String,
    },

    #[error("{operation} failed: {source}")]
    Storage {
        operation: &'static str,
        source: sqlx::Error,
    },
}

impl DbError {
    /// Annotate a raw sqlx error with the failing operation, classifying
    /// schema rejections (unique/foreign-key/not-null/check violations)
    /// as [`DbError::Constraint`].
    pub fn from_sqlx(operation: &'static str, source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &source {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::Constraint {
                        operation,
                        detail: db_err.message().to_string(),
                    };
                }
                _ => {}
            }
        }
        Self::Storage { operation, source }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Result type alias for repository operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_resource_and_id() {
        let err = DbError::not_found("account", 42);
        assert_eq!(err.to_string(), "not found: account '42'");
    }

    #[test]
    fn row_not_found_is_storage_not_constraint() {
        let err = DbError::from_sqlx("get town", sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Storage { operation: "get town", .. }));
    }

    #[test]
    fn storage_error_carries_operation_context() {
        let err = DbError::from_sqlx("create guild", sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("create guild failed"));
    }
}
