//! PostgreSQL repositories.
//!
//! Each repository holds a clone of the pool and implements the matching
//! store trait from [`crate::store`].

pub mod asset_repo;
pub mod client_repo;

pub use asset_repo::AssetRepo;
pub use client_repo::ClientRepo;
