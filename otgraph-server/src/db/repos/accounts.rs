//! Account repository.
//!
//! `password` and `secret` are read from storage (full natural column set)
//! but never serialized outward; the HTTP layer re-exposes `secret` only as
//! a presence flag.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Account record from the `accounts` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub secret: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub account_type: i32,
    pub premium_ends_at: i32,
    pub email: String,
    pub creation: i32,
}

/// Caller-supplied fields for account creation. `creation` is computed
/// server-side at write time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAccountInput {
    pub name: String,
    pub password: String,
    pub email: String,
}

/// Account repository.
pub struct AccountRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AccountRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> DbResult<Account> {
        sqlx::query_as::<_, Account>(
            "SELECT id, name, password, secret, type, premium_ends_at, email, creation \
             FROM accounts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("get account", e))?
        .ok_or_else(|| DbError::not_found("account", id))
    }

    pub async fn get_all(&self, limit: i32) -> DbResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT id, name, password, secret, type, premium_ends_at, email, creation \
             FROM accounts LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list accounts", e))
    }

    /// Insert an account and re-read the full row, so server-computed
    /// columns (`creation`, defaults) are reflected in the returned value.
    pub async fn create(&self, input: CreateAccountInput) -> DbResult<Account> {
        let result = sqlx::query(
            "INSERT INTO accounts (name, password, email, creation) \
             VALUES (?, ?, ?, UNIX_TIMESTAMP())",
        )
        .bind(&input.name)
        .bind(&input.password)
        .bind(&input.email)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("create account", e))?;

        self.get_by_id(result.last_insert_id() as i32).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        Account {
            id: 1,
            name: "testuser".into(),
            password: "hashedpass".into(),
            secret: Some("totp-seed".into()),
            account_type: 1,
            premium_ends_at: 0,
            email: "test@example.com".into(),
            creation: 1234567890,
        }
    }

    #[test]
    fn password_and_secret_never_serialized() {
        let value = serde_json::to_value(sample_account()).expect("serialize");
        let obj = value.as_object().expect("object");
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("secret"));
        assert_eq!(obj["name"], "testuser");
        assert_eq!(obj["premiumEndsAt"], 0);
    }

    #[test]
    fn type_column_keeps_wire_name() {
        let value = serde_json::to_value(sample_account()).expect("serialize");
        assert_eq!(value["type"], 1);
    }
}
