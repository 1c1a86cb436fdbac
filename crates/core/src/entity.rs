//! Entity trait: identity + continuity across re-renders.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Fail fast when two entities share an identity key.
///
/// Reports the first repeated id in iteration order, turned into an error by
/// `duplicate`.
pub fn ensure_unique_ids<'a, E, I, F>(entities: I, duplicate: F) -> CatalogResult<()>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
    F: FnOnce(&E::Id) -> CatalogError,
{
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(duplicate(entity.id()));
        }
    }
    Ok(())
}
