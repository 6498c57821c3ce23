//! Handlers for the `/assets` resource.

use assetdesk_db::models::asset::{CreateAsset, PatchAsset, PutAsset};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{PathId, ValidJson};
use crate::state::AppState;

/// GET /assets
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = state.assets.get_all().await?;
    Ok(Json(assets))
}

/// GET /assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    let asset = state.assets.get_by_id(id).await?;
    Ok(Json(asset))
}

/// GET /assets/client/{client_id}
///
/// A client without assets answers 404.
pub async fn list_by_client(
    State(state): State<AppState>,
    PathId(client_id): PathId,
) -> AppResult<impl IntoResponse> {
    let assets = state.assets.get_by_client_id(client_id).await?;
    Ok(Json(assets))
}

/// POST /assets
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let asset = state.assets.create(input).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// PATCH /assets/{id}
pub async fn update_partial(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<PatchAsset>,
) -> AppResult<impl IntoResponse> {
    let asset = state.assets.update_partial(id, input).await?;
    Ok(Json(asset))
}

/// PUT /assets/{id}
pub async fn update_full(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<PutAsset>,
) -> AppResult<impl IntoResponse> {
    let asset = state.assets.update_full(id, input).await?;
    Ok(Json(asset))
}

/// DELETE /assets/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    state.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
