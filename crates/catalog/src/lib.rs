//! Catalog data model.
//!
//! This crate contains the immutable catalog that the storefront renders:
//! categories, products, price tiers and contact links, plus the load-time
//! validation that rejects malformed catalog documents (no rendering, no IO).

pub mod catalog;
pub mod category;
pub mod contact;
pub mod product;

pub use catalog::{Catalog, CatalogDocument};
pub use category::Category;
pub use contact::ContactLink;
pub use product::{PriceTier, Product};
