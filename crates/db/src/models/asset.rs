//! Asset entity model and DTOs.
//!
//! Assets belong to exactly one client. On the wire the foreign key is
//! `clientId`; in the database it is `client_id`.

use assetdesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `assets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub value: f64,
    pub client_id: DbId,
}

/// DTO for creating a new asset.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "value must be greater than or equal to 0"))]
    pub value: f64,
    #[validate(range(min = 1, message = "clientId must be a positive integer"))]
    pub client_id: DbId,
}

/// DTO for `PATCH /assets/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "value must be greater than or equal to 0"))]
    pub value: Option<f64>,
    #[validate(range(min = 1, message = "clientId must be a positive integer"))]
    pub client_id: Option<DbId>,
}

/// DTO for `PUT /assets/{id}`. Every mutable field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PutAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "value must be greater than or equal to 0"))]
    pub value: f64,
    #[validate(range(min = 1, message = "clientId must be a positive integer"))]
    pub client_id: DbId,
}

/// Foreign-key link from an asset to an existing client.
///
/// Carries only the client id, so writing an asset can never create or
/// modify a client row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRef {
    pub id: DbId,
}

impl ClientRef {
    pub fn connect(id: DbId) -> Self {
        Self { id }
    }
}

/// Insert payload handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub value: f64,
    pub client: ClientRef,
}

impl From<CreateAsset> for NewAsset {
    fn from(input: CreateAsset) -> Self {
        Self {
            name: input.name,
            value: input.value,
            client: ClientRef::connect(input.client_id),
        }
    }
}

/// Fields to write on update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetChanges {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub client: Option<ClientRef>,
}

impl From<PatchAsset> for AssetChanges {
    fn from(patch: PatchAsset) -> Self {
        Self {
            name: patch.name,
            value: patch.value,
            client: patch.client_id.map(ClientRef::connect),
        }
    }
}

impl From<PutAsset> for AssetChanges {
    fn from(put: PutAsset) -> Self {
        Self {
            name: Some(put.name),
            value: Some(put.value),
            client: Some(ClientRef::connect(put.client_id)),
        }
    }
}
