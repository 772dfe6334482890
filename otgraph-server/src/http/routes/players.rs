//! Player endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{CreatePlayerInput, GuildMembership, Player, PlayerDeath, PlayerStorage, Town};
use crate::http::error::ApiError;
use crate::http::routes::accounts::AccountResponse;
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub account_id: Option<String>,
}

/// GET /players?accountId= - players on an account
async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let account_id = params.account_id.ok_or_else(|| ApiError::Validation {
        message: "accountId query parameter is required".into(),
    })?;
    Ok(Json(state.resolver.players(&account_id).await?))
}

/// POST /players - create a player
async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreatePlayerInput>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = state.resolver.create_player(input).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /players/{id}
async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    Ok(Json(state.resolver.player(&id).await?))
}

/// GET /players/{id}/town - Player→Town relation
async fn get_player_town(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Town>, ApiError> {
    let player = state.resolver.player(&id).await?;
    Ok(Json(state.resolver.player_town(&player).await?))
}

/// GET /players/{id}/account - Player→Account relation
async fn get_player_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let player = state.resolver.player(&id).await?;
    let account = state.resolver.player_account(&player).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// GET /players/{id}/deaths - Player→Deaths relation, newest first
async fn get_player_deaths(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PlayerDeath>>, ApiError> {
    let player = state.resolver.player(&id).await?;
    Ok(Json(state.resolver.player_deaths(&player).await?))
}

/// GET /players/{id}/storage
async fn get_player_storage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PlayerStorage>>, ApiError> {
    let player = state.resolver.player(&id).await?;
    Ok(Json(state.resolver.player_storage(&player).await?))
}

/// GET /players/{id}/guild - the player's membership, 404 when
/// unaffiliated
async fn get_player_guild(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GuildMembership>, ApiError> {
    let player = state.resolver.player(&id).await?;
    let membership = state
        .resolver
        .player_guild_membership(&player)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "guild membership",
            id,
        })?;
    Ok(Json(membership))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route("/players/{id}", get(get_player))
        .route("/players/{id}/town", get(get_player_town))
        .route("/players/{id}/account", get(get_player_account))
        .route("/players/{id}/deaths", get(get_player_deaths))
        .route("/players/{id}/storage", get(get_player_storage))
        .route("/players/{id}/guild", get(get_player_guild))
}
