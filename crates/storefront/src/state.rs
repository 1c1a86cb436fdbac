//! Per-section expansion state.
//!
//! The only mutable state of the storefront. Each category section has exactly
//! one [`Expansion`] cell keyed by its [`CategoryId`]; a toggle reads and writes
//! that one entry and nothing else. State lives as long as the rendered view
//! and is never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vitrine_catalog::Catalog;
use vitrine_core::{CatalogError, CatalogResult, CategoryId, Entity};

use crate::theme::Theme;

/// Visibility state of one category section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expansion {
    /// Products are rendered (initial state).
    #[default]
    Expanded,
    /// Only the header is rendered.
    Collapsed,
}

impl Expansion {
    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }

    /// The state after one header activation.
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Expanded => Expansion::Collapsed,
            Expansion::Collapsed => Expansion::Expanded,
        }
    }

    /// Direction glyph shown in the section header.
    pub fn glyph(self, theme: &Theme) -> &str {
        match self {
            Expansion::Expanded => &theme.expanded_glyph,
            Expansion::Collapsed => &theme.collapsed_glyph,
        }
    }
}

/// Expansion state of every section in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    sections: HashMap<CategoryId, Expansion>,
}

impl CatalogState {
    /// One `Expanded` cell per category.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let sections = catalog
            .iter()
            .map(|category| (category.id().clone(), Expansion::default()))
            .collect();
        Self { sections }
    }

    pub fn expansion(&self, id: &CategoryId) -> Option<Expansion> {
        self.sections.get(id).copied()
    }

    /// Flip one section and return its new state.
    pub fn toggle(&mut self, id: &CategoryId) -> CatalogResult<Expansion> {
        let cell = self
            .sections
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found(id.clone()))?;
        *cell = cell.toggled();
        Ok(*cell)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::Category;

    fn id(s: &str) -> CategoryId {
        CategoryId::new(s).unwrap()
    }

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::new(
            ids.iter()
                .map(|s| Category::new(id(s), s.to_uppercase(), ""))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn every_section_starts_expanded() {
        let state = CatalogState::for_catalog(&catalog(&["green", "black", "herbal"]));
        assert_eq!(state.len(), 3);
        for s in ["green", "black", "herbal"] {
            assert_eq!(state.expansion(&id(s)), Some(Expansion::Expanded));
        }
    }

    #[test]
    fn toggle_flips_and_returns_new_state() {
        let mut state = CatalogState::for_catalog(&catalog(&["green"]));
        assert_eq!(state.toggle(&id("green")), Ok(Expansion::Collapsed));
        assert_eq!(state.toggle(&id("green")), Ok(Expansion::Expanded));
    }

    #[test]
    fn toggle_of_unknown_section_is_not_found() {
        let mut state = CatalogState::for_catalog(&catalog(&["green"]));
        assert_eq!(
            state.toggle(&id("oolong")),
            Err(CatalogError::NotFound(id("oolong")))
        );
        assert_eq!(state.expansion(&id("green")), Some(Expansion::Expanded));
    }

    #[test]
    fn glyph_follows_state() {
        let theme = Theme::default();
        assert_eq!(Expansion::Expanded.glyph(&theme), "chevron-up");
        assert_eq!(Expansion::Collapsed.glyph(&theme), "chevron-down");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const IDS: [&str; 4] = ["green", "black", "herbal", "oolong"];

        proptest! {
            /// Property: a section's state is the parity of its own activations;
            /// activations of other sections never affect it.
            #[test]
            fn sections_toggle_in_isolation(
                presses in proptest::collection::vec(0..IDS.len(), 0..64)
            ) {
                let mut state = CatalogState::for_catalog(&catalog(&IDS));
                for &i in &presses {
                    state.toggle(&id(IDS[i])).unwrap();
                }

                for (i, name) in IDS.iter().enumerate() {
                    let own = presses.iter().filter(|&&p| p == i).count();
                    let expected = if own % 2 == 0 {
                        Expansion::Expanded
                    } else {
                        Expansion::Collapsed
                    };
                    prop_assert_eq!(state.expansion(&id(name)), Some(expected));
                }
            }
        }
    }
}
