//! Data models and flat-file persistence for dietmate.
//!
//! The profile, the recipe catalog and the current plan each live in one
//! JSON file inside the data directory (see [`config::StoreConfig`]).

pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use store::{JsonStore, Store};
