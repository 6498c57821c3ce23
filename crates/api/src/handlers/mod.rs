pub mod asset;
pub mod client;
