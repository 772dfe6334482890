//! Town endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{CreateTownInput, Town};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /towns
async fn list_towns(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Town>>, ApiError> {
    Ok(Json(state.resolver.towns().await?))
}

/// POST /towns - create a town
async fn create_town(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateTownInput>,
) -> Result<(StatusCode, Json<Town>), ApiError> {
    let town = state.resolver.create_town(input).await?;
    Ok((StatusCode::CREATED, Json(town)))
}

/// GET /towns/{id}
async fn get_town(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Town>, ApiError> {
    Ok(Json(state.resolver.town(&id).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/towns", get(list_towns).post(create_town))
        .route("/towns/{id}", get(get_town))
}
