//! Market endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{CreateMarketOfferInput, MarketHistory, MarketOffer};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffersParams {
    pub item_type: Option<i32>,
}

/// GET /market/offers?itemType= - offers for an item type, or the most
/// recent 100 overall; newest first either way
async fn list_offers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OffersParams>,
) -> Result<Json<Vec<MarketOffer>>, ApiError> {
    Ok(Json(state.resolver.market_offers(params.item_type).await?))
}

/// POST /market/offers - create an offer
async fn create_offer(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateMarketOfferInput>,
) -> Result<(StatusCode, Json<MarketOffer>), ApiError> {
    let offer = state.resolver.create_market_offer(input).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// GET /market/history/{player_id} - a player's history, newest first
async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<MarketHistory>>, ApiError> {
    Ok(Json(state.resolver.market_history(&player_id).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/market/offers", get(list_offers).post(create_offer))
        .route("/market/history/{player_id}", get(get_history))
}
