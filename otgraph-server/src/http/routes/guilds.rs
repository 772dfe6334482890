//! Guild endpoints: guilds, relations, the invite workflow, wars.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{
    CreateGuildInput, Guild, GuildInvite, GuildMembership, GuildRank, GuildWar, GuildWarKill,
    Player,
};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /guilds
async fn list_guilds(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Guild>>, ApiError> {
    Ok(Json(state.resolver.guilds().await?))
}

/// POST /guilds - create a guild
async fn create_guild(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateGuildInput>,
) -> Result<(StatusCode, Json<Guild>), ApiError> {
    let guild = state.resolver.create_guild(input).await?;
    Ok((StatusCode::CREATED, Json(guild)))
}

/// GET /guilds/{id}
async fn get_guild(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Guild>, ApiError> {
    Ok(Json(state.resolver.guild(&id).await?))
}

/// GET /guilds/{id}/owner - Guild→Owner relation
async fn get_guild_owner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let guild = state.resolver.guild(&id).await?;
    Ok(Json(state.resolver.guild_owner(&guild).await?))
}

/// GET /guilds/{id}/ranks - most senior first
async fn get_guild_ranks(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<GuildRank>>, ApiError> {
    let guild = state.resolver.guild(&id).await?;
    Ok(Json(state.resolver.guild_ranks(&guild).await?))
}

/// GET /guilds/{id}/members
async fn get_guild_members(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<GuildMembership>>, ApiError> {
    let guild = state.resolver.guild(&id).await?;
    Ok(Json(state.resolver.guild_members(&guild).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvitePlayerRequest {
    pub player_id: i32,
}

/// POST /guilds/{id}/invites - invite a player
async fn invite_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<InvitePlayerRequest>,
) -> Result<(StatusCode, Json<GuildInvite>), ApiError> {
    let invite = state.resolver.invite_to_guild(&id, req.player_id).await?;
    Ok((StatusCode::CREATED, Json(invite)))
}

/// POST /guilds/{id}/invites/{player_id}/accept - accept a pending invite
async fn accept_invite(
    State(state): State<Arc<AppState>>,
    Path((guild_id, player_id)): Path<(String, String)>,
) -> Result<Json<GuildMembership>, ApiError> {
    let membership = state
        .resolver
        .accept_guild_invite(&guild_id, &player_id)
        .await?;
    Ok(Json(membership))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarsParams {
    pub guild_id: Option<String>,
}

/// GET /guild-wars?guildId= - wars for one guild, or all wars
async fn list_guild_wars(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WarsParams>,
) -> Result<Json<Vec<GuildWar>>, ApiError> {
    let wars = state
        .resolver
        .guild_wars(params.guild_id.as_deref())
        .await?;
    Ok(Json(wars))
}

/// GET /guild-wars/{id}/kills - kills in a war, newest first
async fn list_war_kills(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<GuildWarKill>>, ApiError> {
    Ok(Json(state.resolver.guild_war_kills(&id).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/guilds", get(list_guilds).post(create_guild))
        .route("/guilds/{id}", get(get_guild))
        .route("/guilds/{id}/owner", get(get_guild_owner))
        .route("/guilds/{id}/ranks", get(get_guild_ranks))
        .route("/guilds/{id}/members", get(get_guild_members))
        .route("/guilds/{id}/invites", post(invite_player))
        .route(
            "/guilds/{id}/invites/{player_id}/accept",
            post(accept_invite),
        )
        .route("/guild-wars", get(list_guild_wars))
        .route("/guild-wars/{id}/kills", get(list_war_kills))
}
