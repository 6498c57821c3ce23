//! Persistence traits and the store-level error signal.
//!
//! Services only ever see these traits. Implementations translate their
//! backend's failures into [`StoreError`] and never raise domain errors.

use assetdesk_core::types::DbId;
use async_trait::async_trait;

use crate::models::asset::{Asset, AssetChanges, NewAsset};
use crate::models::client::{Client, ClientChanges, CreateClient};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure reported by a store.
///
/// Only two conditions are recognised; everything else is opaque.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write would duplicate a value in a unique column.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// An update or delete targeted a row that does not exist.
    #[error("target row missing")]
    RowMissing,

    #[error("store failure: {0}")]
    Other(#[source] BoxError),
}

impl StoreError {
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Other(Box::new(err))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::RowMissing,
            sqlx::Error::Database(ref db_err)
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                StoreError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                }
            }
            other => StoreError::other(other),
        }
    }
}

/// CRUD operations on the `clients` table.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn create(&self, input: &CreateClient) -> Result<Client, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Client>, StoreError>;

    /// All clients in id order.
    async fn list(&self) -> Result<Vec<Client>, StoreError>;

    /// Write the present fields of `changes`. [`StoreError::RowMissing`] if
    /// no row has `id`.
    async fn update(&self, id: DbId, changes: &ClientChanges) -> Result<Client, StoreError>;

    /// [`StoreError::RowMissing`] if no row has `id`.
    async fn delete(&self, id: DbId) -> Result<(), StoreError>;
}

/// CRUD operations on the `assets` table.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn create(&self, input: &NewAsset) -> Result<Asset, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Asset>, StoreError>;

    /// All assets in id order.
    async fn list(&self) -> Result<Vec<Asset>, StoreError>;

    /// Assets owned by `client_id`, in id order. Empty if there are none.
    async fn list_by_client(&self, client_id: DbId) -> Result<Vec<Asset>, StoreError>;

    async fn update(&self, id: DbId, changes: &AssetChanges) -> Result<Asset, StoreError>;

    async fn delete(&self, id: DbId) -> Result<(), StoreError>;
}

/// Liveness probe for the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
impl StoreHealth for crate::DbPool {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(self).await.map_err(StoreError::from)
    }
}
