//! Market repository: open offers and per-player history.
//!
//! History rows are written by an external process that ages offers out;
//! this layer only reads them.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Cap on the unfiltered offer listing, to bound response size.
const OFFER_LIST_CAP: i32 = 100;

/// Open market offer from the `market_offers` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MarketOffer {
    pub id: i32,
    pub player_id: i32,
    pub sale: bool,
    #[sqlx(rename = "itemtype")]
    pub item_type: i32,
    pub amount: i32,
    pub created: i64,
    pub anonymous: bool,
    pub price: i32,
}

/// Closed or expired offer record; append-only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MarketHistory {
    pub id: i32,
    pub player_id: i32,
    pub sale: bool,
    #[sqlx(rename = "itemtype")]
    pub item_type: i32,
    pub amount: i32,
    pub price: i32,
    pub expires_at: i64,
    pub inserted: i64,
    pub state: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMarketOfferInput {
    pub player_id: i32,
    pub sale: bool,
    pub item_type: i32,
    pub amount: i32,
    pub price: i32,
    pub anonymous: bool,
}

/// Market repository.
pub struct MarketRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> MarketRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Offers for one item type, or the most recent offers overall (capped
    /// at 100 rows). Both orderings are newest first; no other filter
    /// combinations exist.
    pub async fn offers(&self, item_type: Option<i32>) -> DbResult<Vec<MarketOffer>> {
        match item_type {
            Some(item_type) => sqlx::query_as::<_, MarketOffer>(
                "SELECT id, player_id, sale, itemtype, amount, created, anonymous, price \
                 FROM market_offers WHERE itemtype = ? ORDER BY created DESC",
            )
            .bind(item_type)
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list market offers", e)),
            None => sqlx::query_as::<_, MarketOffer>(
                "SELECT id, player_id, sale, itemtype, amount, created, anonymous, price \
                 FROM market_offers ORDER BY created DESC LIMIT ?",
            )
            .bind(OFFER_LIST_CAP)
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list market offers", e)),
        }
    }

    /// Insert an offer with a server-assigned creation timestamp and
    /// re-read the full row.
    pub async fn create_offer(&self, input: CreateMarketOfferInput) -> DbResult<MarketOffer> {
        let result = sqlx::query(
            "INSERT INTO market_offers (player_id, sale, itemtype, amount, created, anonymous, price) \
             VALUES (?, ?, ?, ?, UNIX_TIMESTAMP(), ?, ?)",
        )
        .bind(input.player_id)
        .bind(input.sale)
        .bind(input.item_type)
        .bind(input.amount)
        .bind(input.anonymous)
        .bind(input.price)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("create market offer", e))?;

        let id = result.last_insert_id() as i32;
        sqlx::query_as::<_, MarketOffer>(
            "SELECT id, player_id, sale, itemtype, amount, created, anonymous, price \
             FROM market_offers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("get created offer", e))?
        .ok_or_else(|| DbError::not_found("market offer", id))
    }

    /// A player's full offer history, newest-inserted first.
    pub async fn history(&self, player_id: i32) -> DbResult<Vec<MarketHistory>> {
        sqlx::query_as::<_, MarketHistory>(
            "SELECT id, player_id, sale, itemtype, amount, price, expires_at, inserted, state \
             FROM market_history WHERE player_id = ? ORDER BY inserted DESC",
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list market history", e))
    }
}
