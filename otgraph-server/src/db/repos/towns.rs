//! Town repository.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Town record from the `towns` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Town {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "posx")]
    pub pos_x: i32,
    #[sqlx(rename = "posy")]
    pub pos_y: i32,
    #[sqlx(rename = "posz")]
    pub pos_z: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTownInput {
    pub name: String,
    pub pos_x: i32,
    pub pos_y: i32,
    pub pos_z: i32,
}

/// Town repository.
pub struct TownRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> TownRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> DbResult<Town> {
        sqlx::query_as::<_, Town>("SELECT id, name, posx, posy, posz FROM towns WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("get town", e))?
            .ok_or_else(|| DbError::not_found("town", id))
    }

    pub async fn get_all(&self) -> DbResult<Vec<Town>> {
        sqlx::query_as::<_, Town>("SELECT id, name, posx, posy, posz FROM towns")
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list towns", e))
    }

    pub async fn create(&self, input: CreateTownInput) -> DbResult<Town> {
        let result = sqlx::query("INSERT INTO towns (name, posx, posy, posz) VALUES (?, ?, ?, ?)")
            .bind(&input.name)
            .bind(input.pos_x)
            .bind(input.pos_y)
            .bind(input.pos_z)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("create town", e))?;

        self.get_by_id(result.last_insert_id() as i32).await
    }
}
