//! House repository.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// House record from the `houses` table. `owner` of 0 means unowned.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: i32,
    pub owner: i32,
    pub paid: i32,
    pub warnings: i32,
    pub name: String,
    pub rent: i32,
    pub town_id: i32,
    pub bid: i32,
    pub bid_end: i32,
    pub last_bid: i32,
    pub highest_bidder: i32,
    pub size: i32,
    pub beds: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaceBidInput {
    pub player_id: i32,
    pub amount: i32,
}

const HOUSE_COLUMNS: &str = "id, owner, paid, warnings, name, rent, town_id, bid, bid_end, \
     last_bid, highest_bidder, size, beds";

/// House repository.
pub struct HouseRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> HouseRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> DbResult<House> {
        sqlx::query_as::<_, House>(&format!("SELECT {HOUSE_COLUMNS} FROM houses WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("get house", e))?
            .ok_or_else(|| DbError::not_found("house", id))
    }

    /// Houses in a town, or all houses when no town is given.
    pub async fn get_by_town_id(&self, town_id: Option<i32>) -> DbResult<Vec<House>> {
        match town_id {
            Some(town_id) => sqlx::query_as::<_, House>(&format!(
                "SELECT {HOUSE_COLUMNS} FROM houses WHERE town_id = ?"
            ))
            .bind(town_id)
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list houses", e)),
            None => sqlx::query_as::<_, House>(&format!("SELECT {HOUSE_COLUMNS} FROM houses"))
                .fetch_all(self.pool)
                .await
                .map_err(|e| DbError::from_sqlx("list houses", e)),
        }
    }

    /// Overwrite the house's current bid and re-read the row. The bid
    /// timestamp is computed server-side. Whether the new amount must beat
    /// the old one, or the bid window must still be open, is not enforced
    /// at this layer.
    pub async fn place_bid(&self, house_id: i32, player_id: i32, amount: i32) -> DbResult<House> {
        sqlx::query(
            "UPDATE houses SET bid = ?, highest_bidder = ?, last_bid = UNIX_TIMESTAMP() \
             WHERE id = ?",
        )
        .bind(amount)
        .bind(player_id)
        .bind(house_id)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("place bid", e))?;

        self.get_by_id(house_id).await
    }
}
