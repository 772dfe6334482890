//! Graph-shaped query/mutation surface over the repositories.
//!
//! [`Resolver`] is the root of the object graph. Its query/mutation methods
//! (`query.rs`, `mutation.rs`) take external-facing identifiers as opaque
//! strings, convert them, and delegate to exactly one repository call.
//! Relation methods (`relations.rs`) take an already-loaded parent entity
//! and resolve one related field per call.

mod mutation;
mod query;
mod relations;

use sqlx::MySqlPool;

use crate::db::DbError;

/// Errors produced at the dispatch layer.
///
/// An invalid identifier is rejected before any repository call is
/// attempted; everything else is a repository failure passed through
/// unchanged so callers can distinguish not-found from storage trouble.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid {entity} id '{value}'")]
    InvalidId { entity: &'static str, value: String },

    #[error(transparent)]
    Db(#[from] DbError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Parse an opaque inbound identifier into a native row id.
pub(crate) fn parse_id(entity: &'static str, value: &str) -> GraphResult<i32> {
    value.trim().parse::<i32>().map_err(|_| GraphError::InvalidId {
        entity,
        value: value.to_owned(),
    })
}

/// Root resolver; owns a handle to the shared pool and nothing else.
#[derive(Clone)]
pub struct Resolver {
    pool: MySqlPool,
}

impl Resolver {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_ids() {
        assert_eq!(parse_id("account", "1").unwrap(), 1);
        assert_eq!(parse_id("account", " 42 ").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = parse_id("account", "invalid").unwrap_err();
        assert_eq!(err.to_string(), "invalid account id 'invalid'");
        assert!(matches!(err, GraphError::InvalidId { .. }));
    }

    #[test]
    fn rejects_empty_and_overflowing_ids() {
        assert!(parse_id("player", "").is_err());
        assert!(parse_id("player", "99999999999999999999").is_err());
    }

    #[test]
    fn db_errors_pass_through_unchanged() {
        let err = GraphError::from(DbError::not_found("town", 9));
        assert!(matches!(
            err,
            GraphError::Db(DbError::NotFound { resource: "town", .. })
        ));
    }
}
