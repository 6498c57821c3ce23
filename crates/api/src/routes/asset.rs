//! Route definitions for assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::asset;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// PATCH  /{id}                 -> update_partial
/// PUT    /{id}                 -> update_full
/// DELETE /{id}                 -> delete
/// GET    /client/{client_id}   -> list_by_client
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(asset::list).post(asset::create))
        .route(
            "/{id}",
            get(asset::get_by_id)
                .patch(asset::update_partial)
                .put(asset::update_full)
                .delete(asset::delete),
        )
        .route("/client/{client_id}", get(asset::list_by_client))
}
