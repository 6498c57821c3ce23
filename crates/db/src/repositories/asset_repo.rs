//! Repository for the `assets` table.

use assetdesk_core::types::DbId;
use async_trait::async_trait;

use crate::models::asset::{Asset, AssetChanges, NewAsset};
use crate::store::{AssetStore, StoreError};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, value, client_id";

/// Provides CRUD operations for assets.
#[derive(Clone)]
pub struct AssetRepo {
    pool: DbPool,
}

impl AssetRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for AssetRepo {
    /// Insert a new asset linked to an existing client.
    ///
    /// An unknown client id fails on the foreign key and surfaces as
    /// [`StoreError::Other`].
    async fn create(&self, input: &NewAsset) -> Result<Asset, StoreError> {
        let query = format!(
            "INSERT INTO assets (name, value, client_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let asset = sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(input.value)
            .bind(input.client.id)
            .fetch_one(&self.pool)
            .await?;
        Ok(asset)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Asset>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        let asset = sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(asset)
    }

    async fn list(&self) -> Result<Vec<Asset>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY id");
        let assets = sqlx::query_as::<_, Asset>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(assets)
    }

    async fn list_by_client(&self, client_id: DbId) -> Result<Vec<Asset>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE client_id = $1 ORDER BY id");
        let assets = sqlx::query_as::<_, Asset>(&query)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(assets)
    }

    /// Update an asset. Only non-`None` fields are applied.
    async fn update(&self, id: DbId, changes: &AssetChanges) -> Result<Asset, StoreError> {
        let query = format!(
            "UPDATE assets SET \
                name = COALESCE($2, name), \
                value = COALESCE($3, value), \
                client_id = COALESCE($4, client_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.value)
            .bind(changes.client.map(|client| client.id))
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowMissing)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RowMissing);
        }
        Ok(())
    }
}
