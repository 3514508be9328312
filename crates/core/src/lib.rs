//! `shop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the shop crates
//! (no IO, no logging setup).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
