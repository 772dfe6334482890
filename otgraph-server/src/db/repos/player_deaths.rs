//! Player death log; append-only, read newest first.

use serde::Serialize;
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDeath {
    pub player_id: i32,
    pub time: i64,
    pub level: i32,
    pub killed_by: String,
    pub is_player: bool,
    #[sqlx(rename = "mostdamage_by")]
    pub most_damage_by: String,
    #[sqlx(rename = "mostdamage_is_player")]
    pub most_damage_is_player: bool,
}

/// Player death repository.
pub struct PlayerDeathRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PlayerDeathRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_player_id(&self, player_id: i32) -> DbResult<Vec<PlayerDeath>> {
        sqlx::query_as::<_, PlayerDeath>(
            "SELECT player_id, time, level, killed_by, is_player, mostdamage_by, \
             mostdamage_is_player FROM player_deaths WHERE player_id = ? ORDER BY time DESC",
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list player deaths", e))
    }
}
