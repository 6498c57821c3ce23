pub mod asset;
pub mod client;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                      list, create
/// /clients/{id}                 get, patch, put, delete
///
/// /assets                       list, create
/// /assets/{id}                  get, patch, put, delete
/// /assets/client/{client_id}    assets owned by a client
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/assets", asset::router())
}
