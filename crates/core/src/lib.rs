//! `vitrine-core` — catalog foundation building blocks.
//!
//! This crate contains **pure** primitives shared by the catalog model and the
//! storefront view layer (no rendering, no IO).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, ensure_unique_ids};
pub use error::{CatalogError, CatalogResult};
pub use id::CategoryId;
