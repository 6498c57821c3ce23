//! Entity services.
//!
//! Services sit between the handlers and the store traits. They are the only
//! place where a [`StoreError`] is turned into a [`CoreError`].

pub mod asset;
pub mod client;

pub use asset::AssetService;
pub use client::ClientService;

use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_db::models::client::EMAIL_CONSTRAINT;
use assetdesk_db::store::StoreError;

/// Classify a store failure for `operation` on `entity` (optionally row `id`).
fn classify(err: StoreError, entity: &'static str, id: Option<DbId>, operation: &str) -> CoreError {
    match (err, id) {
        (StoreError::UniqueViolation { constraint }, _) => {
            CoreError::Conflict(conflict_message(entity, &constraint))
        }
        (StoreError::RowMissing, Some(id)) => CoreError::NotFound { entity, id },
        (err, _) => {
            tracing::error!(entity, operation, error = %err, "Store operation failed");
            CoreError::Internal(format!("Failed to {operation} {entity}: {err}"))
        }
    }
}

fn conflict_message(entity: &str, constraint: &str) -> String {
    if constraint == EMAIL_CONSTRAINT {
        "A client with this email already exists".to_string()
    } else {
        format!("{entity} violates unique constraint {constraint}")
    }
}
