//! Storefront facade: catalog + theme + expansion state.

use anyhow::Context;
use serde::Deserialize;

use vitrine_catalog::{Catalog, CatalogDocument, ContactLink};
use vitrine_core::{CatalogError, CatalogResult, CategoryId};

use crate::components::{catalog_root, contact_strip};
use crate::event::{Action, UiEvent};
use crate::node::ViewNode;
use crate::state::{CatalogState, Expansion};
use crate::theme::Theme;

const EMBEDDED_DOCUMENT: &str = include_str!("../assets/storefront.json");

/// Serialized storefront document (the static catalog asset).
#[derive(Debug, Deserialize)]
struct StorefrontDocument {
    #[serde(default)]
    theme: Theme,
    catalog: CatalogDocument,
    #[serde(default)]
    contacts: Vec<ContactLink>,
}

/// A rendered catalog view and its client-local state.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    contacts: Vec<ContactLink>,
    theme: Theme,
    state: CatalogState,
}

impl Storefront {
    /// Build a storefront with every section expanded.
    pub fn new(catalog: Catalog, contacts: Vec<ContactLink>, theme: Theme) -> CatalogResult<Self> {
        theme.validate()?;
        let state = CatalogState::for_catalog(&catalog);

        tracing::info!(
            categories = catalog.len(),
            products = catalog.product_count(),
            contacts = contacts.len(),
            "storefront ready"
        );

        Ok(Self {
            catalog,
            contacts,
            theme,
            state,
        })
    }

    /// Parse, validate and build a storefront from a JSON document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let document: StorefrontDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::parse(e.to_string()))?;
        let catalog = document.catalog.into_catalog()?;
        Self::new(catalog, document.contacts, document.theme)
    }

    /// The demo storefront compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_DOCUMENT).context("embedded storefront document is invalid")
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn contacts(&self) -> &[ContactLink] {
        &self.contacts
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn expansion(&self, id: &CategoryId) -> Option<Expansion> {
        self.state.expansion(id)
    }

    /// Render the full page: all category sections, then the contact strip.
    pub fn render(&self) -> ViewNode {
        let page = catalog_root(&self.catalog, &self.state, &self.theme);
        match contact_strip(&self.contacts, &self.theme) {
            Some(strip) => page.child(strip).into(),
            None => page.into(),
        }
    }

    /// Apply one user event and return the addressed section's new state.
    pub fn dispatch(&mut self, event: impl Into<UiEvent>) -> CatalogResult<Expansion> {
        match event.into() {
            UiEvent::Activate(Action::ToggleCategory(id)) => {
                let expansion = self.state.toggle(&id).inspect_err(|_| {
                    tracing::warn!(category = %id, "activation for unknown category ignored");
                })?;
                tracing::debug!(
                    category = %id,
                    expanded = expansion.is_expanded(),
                    "category toggled"
                );
                Ok(expansion)
            }
        }
    }
}
