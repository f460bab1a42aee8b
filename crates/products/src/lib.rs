//! Products catalog module.
//!
//! This crate holds the product record and the in-memory catalog store that
//! keeps at most one product per case-insensitive name. It does no IO; callers
//! construct one store at startup and share it by handle.

pub mod config;
pub mod name;
pub mod product;
pub mod store;

pub use config::{StoreConfig, UpdatePlacement};
pub use name::ProductName;
pub use product::{PricingMetadata, Product};
pub use store::{InMemoryProductStore, ProductStore, StoreError};
