//! Account-scoped key-value storage and VIP list.

use serde::Serialize;
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Key-value pair from the `account_storage` table; `key` is unique per
/// account.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AccountStorage {
    pub account_id: i32,
    pub key: i32,
    pub value: i32,
}

/// VIP list entry from the `account_viplist` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VipEntry {
    pub account_id: i32,
    pub player_id: i32,
    pub description: String,
    pub icon: i32,
    pub notify: bool,
}

/// Account storage repository.
pub struct AccountStorageRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AccountStorageRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_account_id(&self, account_id: i32) -> DbResult<Vec<AccountStorage>> {
        // `key` is a reserved word in MySQL
        sqlx::query_as::<_, AccountStorage>(
            "SELECT account_id, `key`, `value` FROM account_storage WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list account storage", e))
    }

    pub async fn vip_list(&self, account_id: i32) -> DbResult<Vec<VipEntry>> {
        sqlx::query_as::<_, VipEntry>(
            "SELECT account_id, player_id, description, icon, notify \
             FROM account_viplist WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list vip entries", e))
    }
}
