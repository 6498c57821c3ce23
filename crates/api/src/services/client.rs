//! Client service: create/read/update/delete over an injected [`ClientStore`].

use std::sync::Arc;

use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_db::models::client::{Client, ClientChanges, CreateClient, PatchClient, PutClient};
use assetdesk_db::store::ClientStore;

use super::classify;

const ENTITY: &str = "Client";

pub struct ClientService {
    store: Arc<dyn ClientStore>,
}

impl ClientService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Persist a new client. A taken email yields [`CoreError::Conflict`].
    pub async fn create(&self, input: CreateClient) -> Result<Client, CoreError> {
        let client = self
            .store
            .create(&input)
            .await
            .map_err(|e| classify(e, ENTITY, None, "create"))?;
        tracing::info!(client_id = client.id, "Client created");
        Ok(client)
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Client, CoreError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| classify(e, ENTITY, Some(id), "retrieve"))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, CoreError> {
        self.store
            .list()
            .await
            .map_err(|e| classify(e, ENTITY, None, "list"))
    }

    /// PATCH: write only the fields present in `patch`.
    pub async fn update_partial(&self, id: DbId, patch: PatchClient) -> Result<Client, CoreError> {
        self.update(id, patch.into()).await
    }

    /// PUT: replace every mutable field. Completeness is guaranteed by [`PutClient`].
    pub async fn update_full(&self, id: DbId, put: PutClient) -> Result<Client, CoreError> {
        self.update(id, put.into()).await
    }

    /// Shared update primitive behind PATCH and PUT.
    pub async fn update(&self, id: DbId, changes: ClientChanges) -> Result<Client, CoreError> {
        let client = self
            .store
            .update(id, &changes)
            .await
            .map_err(|e| classify(e, ENTITY, Some(id), "update"))?;
        tracing::info!(client_id = id, "Client updated");
        Ok(client)
    }

    /// Remove a client. Fails while assets still reference it.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store
            .delete(id)
            .await
            .map_err(|e| classify(e, ENTITY, Some(id), "delete"))?;
        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }
}
