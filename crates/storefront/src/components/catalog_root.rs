use vitrine_catalog::Catalog;
use vitrine_core::Entity;

use crate::components::category_section;
use crate::node::{Element, Tag};
use crate::state::CatalogState;
use crate::theme::Theme;

/// One section per category, in catalog order, each keyed by its id.
///
/// Holds no state of its own: every section reads its own cell from `state`.
/// Sections missing from `state` render in the initial (expanded) state.
pub fn catalog_root(catalog: &Catalog, state: &CatalogState, theme: &Theme) -> Element {
    Element::new(Tag::Div)
        .class(&theme.classes.page)
        .children(catalog.iter().map(|category| {
            let expansion = state.expansion(category.id()).unwrap_or_default();
            category_section(category, expansion, theme)
        }))
}
