//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Has no internal workspace dependencies: the error taxonomy, id type and
//! field-level validation helpers live here so both `assetdesk-db` and
//! `assetdesk-api` can use them.

pub mod error;
pub mod types;
pub mod validation;
