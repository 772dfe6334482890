//! Account endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{
    Account, AccountBan, AccountStorage, BanAccountInput, CreateAccountInput, Player, VipEntry,
};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Outward account representation: everything except the password, with
/// the secret reduced to a presence flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i32,
    pub name: String,
    pub has_secret: bool,
    #[serde(rename = "type")]
    pub account_type: i32,
    pub premium_ends_at: i32,
    pub email: String,
    pub creation: i32,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            name: a.name,
            has_secret: a.secret.is_some(),
            account_type: a.account_type,
            premium_ends_at: a.premium_ends_at,
            email: a.email,
            creation: a.creation,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i32>,
}

/// GET /accounts - capped listing
async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = state.resolver.accounts(params.limit).await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// POST /accounts - create an account
async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateAccountInput>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state.resolver.create_account(input).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// GET /accounts/{id}
async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.resolver.account(&id).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// GET /accounts/{id}/players - Account→Players relation
async fn get_account_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let account = state.resolver.account(&id).await?;
    Ok(Json(state.resolver.account_players(&account).await?))
}

/// GET /accounts/{id}/bans - Account→AccountBans relation
async fn get_account_bans(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AccountBan>>, ApiError> {
    let account = state.resolver.account(&id).await?;
    Ok(Json(state.resolver.account_bans(&account).await?))
}

/// GET /accounts/{id}/storage
async fn get_account_storage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AccountStorage>>, ApiError> {
    let account = state.resolver.account(&id).await?;
    Ok(Json(state.resolver.account_storage(&account).await?))
}

/// GET /accounts/{id}/viplist
async fn get_account_vip_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<VipEntry>>, ApiError> {
    let account = state.resolver.account(&id).await?;
    Ok(Json(state.resolver.account_vip_list(&account).await?))
}

/// POST /bans - ban an account
async fn ban_account(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BanAccountInput>,
) -> Result<(StatusCode, Json<AccountBan>), ApiError> {
    let ban = state.resolver.ban_account(input).await?;
    Ok((StatusCode::CREATED, Json(ban)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/{id}", get(get_account))
        .route("/accounts/{id}/players", get(get_account_players))
        .route("/accounts/{id}/bans", get(get_account_bans))
        .route("/accounts/{id}/storage", get(get_account_storage))
        .route("/accounts/{id}/viplist", get(get_account_vip_list))
        .route("/bans", post(ban_account))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_flags_secret_without_exposing_it() {
        let account = Account {
            id: 1,
            name: "testuser".into(),
            password: "hashedpass".into(),
            secret: Some("totp-seed".into()),
            account_type: 1,
            premium_ends_at: 0,
            email: "test@example.com".into(),
            creation: 1234567890,
        };

        let value = serde_json::to_value(AccountResponse::from(account)).expect("serialize");
        let obj = value.as_object().expect("object");
        assert_eq!(obj["hasSecret"], true);
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("secret"));
    }

    #[test]
    fn response_without_secret() {
        let account = Account {
            id: 2,
            name: "plain".into(),
            password: "x".into(),
            secret: None,
            account_type: 1,
            premium_ends_at: 0,
            email: "plain@example.com".into(),
            creation: 0,
        };

        let value = serde_json::to_value(AccountResponse::from(account)).expect("serialize");
        assert_eq!(value["hasSecret"], false);
    }
}
