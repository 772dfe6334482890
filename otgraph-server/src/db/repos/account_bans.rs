//! Account ban repository.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Ban record from the `account_bans` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccountBan {
    pub account_id: i32,
    pub reason: String,
    pub banned_at: i64,
    pub expires_at: i64,
    pub banned_by: i32,
}

/// Caller-supplied fields for a ban. `banned_at` is computed server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BanAccountInput {
    pub account_id: i32,
    pub reason: String,
    pub expires_at: i64,
    pub banned_by: i32,
}

/// Account ban repository.
pub struct AccountBanRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AccountBanRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_account_id(&self, account_id: i32) -> DbResult<Vec<AccountBan>> {
        sqlx::query_as::<_, AccountBan>(
            "SELECT account_id, reason, banned_at, expires_at, banned_by \
             FROM account_bans WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list account bans", e))
    }

    /// Insert a ban and re-read it. The table has no generated id, so the
    /// re-read goes through the account's ban list.
    pub async fn create(&self, input: BanAccountInput) -> DbResult<AccountBan> {
        sqlx::query(
            "INSERT INTO account_bans (account_id, reason, banned_at, expires_at, banned_by) \
             VALUES (?, ?, UNIX_TIMESTAMP(), ?, ?)",
        )
        .bind(input.account_id)
        .bind(&input.reason)
        .bind(input.expires_at)
        .bind(input.banned_by)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("create account ban", e))?;

        self.get_by_account_id(input.account_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbError::not_found("account ban", input.account_id))
    }
}
