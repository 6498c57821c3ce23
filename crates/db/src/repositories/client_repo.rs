//! Repository for the `clients` table.

use assetdesk_core::types::DbId;
use async_trait::async_trait;

use crate::models::client::{Client, ClientChanges, CreateClient};
use crate::store::{ClientStore, StoreError};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, status";

/// Provides CRUD operations for clients.
#[derive(Clone)]
pub struct ClientRepo {
    pool: DbPool,
}

impl ClientRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for ClientRepo {
    /// Insert a new client, returning the created row.
    async fn create(&self, input: &CreateClient) -> Result<Client, StoreError> {
        let query = format!(
            "INSERT INTO clients (name, email, status) \
             VALUES ($1, $2, COALESCE($3, true)) \
             RETURNING {COLUMNS}"
        );
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.status)
            .fetch_one(&self.pool)
            .await?;
        Ok(client)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(client)
    }

    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        let clients = sqlx::query_as::<_, Client>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(clients)
    }

    /// Update a client. Only non-`None` fields are applied.
    async fn update(&self, id: DbId, changes: &ClientChanges) -> Result<Client, StoreError> {
        let query = format!(
            "UPDATE clients SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                status = COALESCE($4, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.email)
            .bind(changes.status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowMissing)
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RowMissing);
        }
        Ok(())
    }
}
