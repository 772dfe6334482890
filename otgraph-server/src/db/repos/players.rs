//! Player repository.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Player record from the `players` table. Column names are the fixed
/// schema contract; `experience` and `balance` are 64-bit.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub group_id: i32,
    pub account_id: i32,
    pub level: i32,
    pub vocation: i32,
    pub health: i32,
    #[sqlx(rename = "healthmax")]
    pub health_max: i32,
    pub experience: i64,
    #[sqlx(rename = "lookbody")]
    pub look_body: i32,
    #[sqlx(rename = "lookfeet")]
    pub look_feet: i32,
    #[sqlx(rename = "lookhead")]
    pub look_head: i32,
    #[sqlx(rename = "looklegs")]
    pub look_legs: i32,
    #[sqlx(rename = "looktype")]
    pub look_type: i32,
    #[sqlx(rename = "lookaddons")]
    pub look_addons: i32,
    #[sqlx(rename = "maglevel")]
    pub mag_level: i32,
    pub mana: i32,
    #[sqlx(rename = "manamax")]
    pub mana_max: i32,
    pub soul: i32,
    pub town_id: i32,
    #[sqlx(rename = "posx")]
    pub pos_x: i32,
    #[sqlx(rename = "posy")]
    pub pos_y: i32,
    #[sqlx(rename = "posz")]
    pub pos_z: i32,
    pub cap: i32,
    pub sex: i32,
    #[sqlx(rename = "lastlogin")]
    pub last_login: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePlayerInput {
    pub name: String,
    pub account_id: i32,
    pub sex: i32,
    pub vocation: i32,
}

const PLAYER_COLUMNS: &str = "id, name, group_id, account_id, level, vocation, health, healthmax, \
     experience, lookbody, lookfeet, lookhead, looklegs, looktype, lookaddons, \
     maglevel, mana, manamax, soul, town_id, posx, posy, posz, cap, sex, \
     lastlogin, balance";

/// Player repository.
pub struct PlayerRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PlayerRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> DbResult<Player> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("get player", e))?
        .ok_or_else(|| DbError::not_found("player", id))
    }

    pub async fn get_by_account_id(&self, account_id: i32) -> DbResult<Vec<Player>> {
        sqlx::query_as::<_, Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE account_id = ?"
        ))
        .bind(account_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list players", e))
    }

    /// Insert a player and re-read the full row. All stat and appearance
    /// columns come from schema defaults, not the caller.
    pub async fn create(&self, input: CreatePlayerInput) -> DbResult<Player> {
        let result = sqlx::query(
            "INSERT INTO players (name, account_id, sex, vocation) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(input.account_id)
        .bind(input.sex)
        .bind(input.vocation)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("create player", e))?;

        self.get_by_id(result.last_insert_id() as i32).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let player = Player {
            id: 1,
            name: "TestPlayer".into(),
            group_id: 1,
            account_id: 7,
            level: 50,
            vocation: 4,
            health: 500,
            health_max: 500,
            experience: 123456,
            look_body: 0,
            look_feet: 0,
            look_head: 0,
            look_legs: 0,
            look_type: 136,
            look_addons: 0,
            mag_level: 20,
            mana: 300,
            mana_max: 300,
            soul: 0,
            town_id: 1,
            pos_x: 100,
            pos_y: 200,
            pos_z: 7,
            cap: 400,
            sex: 1,
            last_login: 0,
            balance: 0,
        };

        let value = serde_json::to_value(player).expect("serialize");
        assert_eq!(value["healthMax"], 500);
        assert_eq!(value["lookType"], 136);
        assert_eq!(value["magLevel"], 20);
        assert_eq!(value["posX"], 100);
        assert_eq!(value["accountId"], 7);
        assert_eq!(value["lastLogin"], 0);
    }
}
