use std::sync::Arc;

use assetdesk_db::store::{AssetStore, ClientStore, StoreHealth};

use crate::services::{AssetService, ClientService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Client service (one per process).
    pub clients: Arc<ClientService>,
    /// Asset service (one per process).
    pub assets: Arc<AssetService>,
    /// Liveness probe for the backing store, used by `/health`.
    pub health: Arc<dyn StoreHealth>,
}

impl AppState {
    pub fn new(
        clients: Arc<dyn ClientStore>,
        assets: Arc<dyn AssetStore>,
        health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            clients: Arc::new(ClientService::new(clients)),
            assets: Arc::new(AssetService::new(assets)),
            health,
        }
    }

    /// Wire both services and the health probe onto a single store.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ClientStore + AssetStore + StoreHealth + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }
}
