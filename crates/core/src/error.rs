//! Catalog error model.

use thiserror::Error;

use crate::id::CategoryId;

/// Result type used across the catalog and storefront layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Rendering itself never fails; these variants cover malformed catalog data
/// rejected at load time and events addressed to sections that do not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. blank product name, bad grid config).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two categories share the same identity key.
    #[error("duplicate category identity: {0}")]
    DuplicateCategory(CategoryId),

    /// An identifier was invalid (e.g. blank category id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The catalog document could not be parsed.
    #[error("malformed catalog document: {0}")]
    Parse(String),

    /// A category addressed by an event is not part of the catalog.
    #[error("category not found: {0}")]
    NotFound(CategoryId),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn not_found(id: CategoryId) -> Self {
        Self::NotFound(id)
    }
}
