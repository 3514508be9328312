//! Product catalog (in-memory).
//!
//! This crate holds a small catalog of products keyed by identity and answers
//! bounded name/producer searches. Pure in-memory logic: no IO, no storage.

pub mod catalog;
pub mod config;
mod naming;
pub mod product;

pub use catalog::{InMemoryCatalog, ProductCatalog};
pub use config::CatalogConfig;
pub use product::{Product, ProductId};
