//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs: create, partial update (PATCH)
//!   and full update (PUT)
//! - A changeset struct that both update DTOs convert into

pub mod asset;
pub mod client;
