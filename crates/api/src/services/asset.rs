//! Asset service: create/read/update/delete over an injected [`AssetStore`].

use std::sync::Arc;

use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_db::models::asset::{Asset, AssetChanges, CreateAsset, NewAsset, PatchAsset, PutAsset};
use assetdesk_db::store::AssetStore;

use super::classify;

const ENTITY: &str = "Asset";

pub struct AssetService {
    store: Arc<dyn AssetStore>,
}

impl AssetService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Persist a new asset, linked to its client by id only.
    pub async fn create(&self, input: CreateAsset) -> Result<Asset, CoreError> {
        let new_asset = NewAsset::from(input);
        let asset = self
            .store
            .create(&new_asset)
            .await
            .map_err(|e| classify(e, ENTITY, None, "create"))?;
        tracing::info!(asset_id = asset.id, client_id = asset.client_id, "Asset created");
        Ok(asset)
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Asset, CoreError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| classify(e, ENTITY, Some(id), "retrieve"))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn get_all(&self) -> Result<Vec<Asset>, CoreError> {
        self.store
            .list()
            .await
            .map_err(|e| classify(e, ENTITY, None, "list"))
    }

    /// Assets owned by `client_id`. An empty result is reported as not found.
    pub async fn get_by_client_id(&self, client_id: DbId) -> Result<Vec<Asset>, CoreError> {
        let assets = self
            .store
            .list_by_client(client_id)
            .await
            .map_err(|e| classify(e, ENTITY, None, "list"))?;
        if assets.is_empty() {
            return Err(CoreError::NotFoundForParent {
                entity: "assets",
                parent: "client",
                parent_id: client_id,
            });
        }
        Ok(assets)
    }

    /// PATCH: write only the fields present in `patch`.
    pub async fn update_partial(&self, id: DbId, patch: PatchAsset) -> Result<Asset, CoreError> {
        self.update(id, patch.into()).await
    }

    /// PUT: replace every mutable field. Completeness is guaranteed by [`PutAsset`].
    pub async fn update_full(&self, id: DbId, put: PutAsset) -> Result<Asset, CoreError> {
        self.update(id, put.into()).await
    }

    /// Shared update primitive behind PATCH and PUT.
    pub async fn update(&self, id: DbId, changes: AssetChanges) -> Result<Asset, CoreError> {
        let asset = self
            .store
            .update(id, &changes)
            .await
            .map_err(|e| classify(e, ENTITY, Some(id), "update"))?;
        tracing::info!(asset_id = id, client_id = asset.client_id, "Asset updated");
        Ok(asset)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store
            .delete(id)
            .await
            .map_err(|e| classify(e, ENTITY, Some(id), "delete"))?;
        tracing::info!(asset_id = id, "Asset deleted");
        Ok(())
    }
}
