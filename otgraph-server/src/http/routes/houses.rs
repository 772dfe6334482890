//! House endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{House, PlaceBidInput};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub town_id: Option<String>,
}

/// GET /houses?townId= - houses in a town, or all houses
async fn list_houses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<House>>, ApiError> {
    let houses = state.resolver.houses(params.town_id.as_deref()).await?;
    Ok(Json(houses))
}

/// GET /houses/{id}
async fn get_house(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<House>, ApiError> {
    Ok(Json(state.resolver.house(&id).await?))
}

/// POST /houses/{id}/bid - overwrite the current bid and return the house
async fn place_bid(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<PlaceBidInput>,
) -> Result<Json<House>, ApiError> {
    let house = state
        .resolver
        .place_house_bid(&id, input.player_id, input.amount)
        .await?;
    Ok(Json(house))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/houses", get(list_houses))
        .route("/houses/{id}", get(get_house))
        .route("/houses/{id}/bid", post(place_bid))
}
