//! Player-scoped key-value storage.

use serde::Serialize;
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Key-value pair from the `player_storage` table; `key` is unique per
/// player.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStorage {
    pub player_id: i32,
    pub key: i32,
    pub value: i32,
}

/// Player storage repository.
pub struct PlayerStorageRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PlayerStorageRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_player_id(&self, player_id: i32) -> DbResult<Vec<PlayerStorage>> {
        // `key` is a reserved word in MySQL
        sqlx::query_as::<_, PlayerStorage>(
            "SELECT player_id, `key`, `value` FROM player_storage WHERE player_id = ?",
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list player storage", e))
    }
}
