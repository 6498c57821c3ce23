//! Handlers for the `/clients` resource.

use assetdesk_db::models::client::{CreateClient, PatchClient, PutClient};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{PathId, ValidJson};
use crate::state::AppState;

/// GET /clients
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clients = state.clients.get_all().await?;
    Ok(Json(clients))
}

/// GET /clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    let client = state.clients.get_by_id(id).await?;
    Ok(Json(client))
}

/// POST /clients
///
/// Create a new client. Duplicate emails are rejected with 409.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateClient>,
) -> AppResult<impl IntoResponse> {
    let client = state.clients.create(input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PATCH /clients/{id}
pub async fn update_partial(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<PatchClient>,
) -> AppResult<impl IntoResponse> {
    let client = state.clients.update_partial(id, input).await?;
    Ok(Json(client))
}

/// PUT /clients/{id}
pub async fn update_full(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<PutClient>,
) -> AppResult<impl IntoResponse> {
    let client = state.clients.update_full(id, input).await?;
    Ok(Json(client))
}

/// DELETE /clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    state.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
