//! Client entity model and DTOs.

use assetdesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Unique constraint on `clients.email`, as named in the migrations.
pub const EMAIL_CONSTRAINT: &str = "uq_clients_email";

/// A row from the `clients` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub status: bool,
}

/// DTO for creating a new client. `status` defaults to `true` in the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub status: Option<bool>,
}

/// DTO for `PATCH /clients/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PatchClient {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub status: Option<bool>,
}

/// DTO for `PUT /clients/{id}`. Every mutable field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PutClient {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub status: bool,
}

/// Fields to write on update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<bool>,
}

impl From<PatchClient> for ClientChanges {
    fn from(patch: PatchClient) -> Self {
        Self {
            name: patch.name,
            email: patch.email,
            status: patch.status,
        }
    }
}

impl From<PutClient> for ClientChanges {
    fn from(put: PutClient) -> Self {
        Self {
            name: Some(put.name),
            email: Some(put.email),
            status: Some(put.status),
        }
    }
}
