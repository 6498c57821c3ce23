//! In-process store implementing every store trait.
//!
//! Mirrors the PostgreSQL schema rules that matter to callers: ids are
//! assigned sequentially from 1, client emails are unique, assets must point
//! at an existing client, and a client that still owns assets cannot be
//! deleted.

use std::collections::BTreeMap;

use assetdesk_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::asset::{Asset, AssetChanges, NewAsset};
use crate::models::client::{Client, ClientChanges, CreateClient, EMAIL_CONSTRAINT};
use crate::store::{AssetStore, ClientStore, StoreError, StoreHealth};

#[derive(Debug, thiserror::Error)]
enum IntegrityError {
    #[error("client {0} does not exist")]
    MissingClient(DbId),
    #[error("client {0} is still referenced by assets")]
    ClientReferenced(DbId),
}

#[derive(Debug, Default)]
struct Tables {
    clients: BTreeMap<DbId, Client>,
    assets: BTreeMap<DbId, Asset>,
    last_client_id: DbId,
    last_asset_id: DbId,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<DbId>) -> bool {
        self.clients
            .values()
            .any(|c| c.email == email && Some(c.id) != except)
    }

    fn require_client(&self, id: DbId) -> Result<(), StoreError> {
        if self.clients.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::other(IntegrityError::MissingClient(id)))
        }
    }
}

fn email_violation() -> StoreError {
    StoreError::UniqueViolation {
        constraint: EMAIL_CONSTRAINT.to_string(),
    }
}

/// Store keeping both tables in memory behind one lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn create(&self, input: &CreateClient) -> Result<Client, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.email_taken(&input.email, None) {
            return Err(email_violation());
        }
        tables.last_client_id += 1;
        let client = Client {
            id: tables.last_client_id,
            name: input.name.clone(),
            email: input.email.clone(),
            status: input.status.unwrap_or(true),
        };
        tables.clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError> {
        Ok(self.tables.lock().await.clients.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.tables.lock().await.clients.values().cloned().collect())
    }

    async fn update(&self, id: DbId, changes: &ClientChanges) -> Result<Client, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.clients.contains_key(&id) {
            return Err(StoreError::RowMissing);
        }
        if let Some(email) = &changes.email {
            if tables.email_taken(email, Some(id)) {
                return Err(email_violation());
            }
        }
        let client = tables
            .clients
            .get_mut(&id)
            .ok_or(StoreError::RowMissing)?;
        if let Some(name) = &changes.name {
            client.name = name.clone();
        }
        if let Some(email) = &changes.email {
            client.email = email.clone();
        }
        if let Some(status) = changes.status {
            client.status = status;
        }
        Ok(client.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.clients.contains_key(&id) {
            return Err(StoreError::RowMissing);
        }
        if tables.assets.values().any(|a| a.client_id == id) {
            return Err(StoreError::other(IntegrityError::ClientReferenced(id)));
        }
        tables.clients.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl AssetStore for MemoryStore {
    async fn create(&self, input: &NewAsset) -> Result<Asset, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.require_client(input.client.id)?;
        tables.last_asset_id += 1;
        let asset = Asset {
            id: tables.last_asset_id,
            name: input.name.clone(),
            value: input.value,
            client_id: input.client.id,
        };
        tables.assets.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Asset>, StoreError> {
        Ok(self.tables.lock().await.assets.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Asset>, StoreError> {
        Ok(self.tables.lock().await.assets.values().cloned().collect())
    }

    async fn list_by_client(&self, client_id: DbId) -> Result<Vec<Asset>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .assets
            .values()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: DbId, changes: &AssetChanges) -> Result<Asset, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.assets.contains_key(&id) {
            return Err(StoreError::RowMissing);
        }
        if let Some(client) = changes.client {
            tables.require_client(client.id)?;
        }
        let asset = tables.assets.get_mut(&id).ok_or(StoreError::RowMissing)?;
        if let Some(name) = &changes.name {
            asset.name = name.clone();
        }
        if let Some(value) = changes.value {
            asset.value = value;
        }
        if let Some(client) = changes.client {
            asset.client_id = client.id;
        }
        Ok(asset.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        match self.tables.lock().await.assets.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::RowMissing),
        }
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
