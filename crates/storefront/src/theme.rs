//! Visual configuration: fixed decorations, glyph names and class tokens.
//!
//! Every field has a default, so a storefront document may override any subset
//! of the theme (or omit it entirely).

use serde::{Deserialize, Serialize};

use vitrine_core::{CatalogError, CatalogResult};

/// Responsive column policy of the price grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridLayout {
    /// Columns on narrow viewports.
    pub base_columns: u8,
    /// Columns from the `sm` breakpoint up.
    pub wide_columns: u8,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            base_columns: 2,
            wide_columns: 4,
        }
    }
}

impl GridLayout {
    pub fn class_tokens(&self) -> String {
        format!(
            "grid grid-cols-{} sm:grid-cols-{} gap-2",
            self.base_columns, self.wide_columns
        )
    }
}

/// Class tokens applied by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassTokens {
    pub page: String,
    pub section: String,
    pub header: String,
    pub header_title: String,
    pub toggle: String,
    pub product_list: String,
    pub card: String,
    pub card_dimmed: String,
    pub card_header: String,
    pub card_heading: String,
    pub card_title: String,
    pub card_content: String,
    pub badge: String,
    pub sold_out: String,
    pub description: String,
    pub grid_cell: String,
    pub quantity: String,
    pub price: String,
    pub contacts: String,
    pub contact_link: String,
}

impl Default for ClassTokens {
    fn default() -> Self {
        Self {
            page: "min-h-screen bg-zinc-950 text-zinc-100 p-6".into(),
            section: "mb-8".into(),
            header: "w-full flex justify-between items-center p-4 bg-zinc-900 rounded-xl border border-zinc-700".into(),
            header_title: "text-xl font-bold".into(),
            toggle: "toggle".into(),
            product_list: "mt-4 space-y-4".into(),
            card: "card bg-zinc-900/80 border-zinc-800".into(),
            card_dimmed: "opacity-60".into(),
            card_header: "pb-2".into(),
            card_heading: "flex items-center justify-between".into(),
            card_title: "text-lg text-zinc-100".into(),
            card_content: "card-content".into(),
            badge: "badge bg-amber-500/20 text-amber-400 border-amber-500/30".into(),
            sold_out: "badge sold-out bg-red-500/20 text-red-400 border-red-500/30".into(),
            description: "text-sm text-zinc-500".into(),
            grid_cell: "bg-zinc-800/50 p-2 rounded-lg text-center".into(),
            quantity: "text-xs text-zinc-500".into(),
            price: "text-zinc-200 font-semibold".into(),
            contacts: "contacts flex gap-4 mt-8".into(),
            contact_link: "contact-link".into(),
        }
    }
}

/// Storefront theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Wrapper placed on both sides of every product name.
    pub attention_marker: String,
    pub sold_out_label: String,
    /// Icon name of the toggle while a section is expanded.
    pub expanded_glyph: String,
    /// Icon name of the toggle while a section is collapsed.
    pub collapsed_glyph: String,
    pub grid: GridLayout,
    pub classes: ClassTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            attention_marker: "‼️".into(),
            sold_out_label: "Sold Out".into(),
            expanded_glyph: "chevron-up".into(),
            collapsed_glyph: "chevron-down".into(),
            grid: GridLayout::default(),
            classes: ClassTokens::default(),
        }
    }
}

impl Theme {
    /// Reject layouts that cannot be rendered.
    pub fn validate(&self) -> CatalogResult<()> {
        let GridLayout {
            base_columns,
            wide_columns,
        } = self.grid;

        if base_columns == 0 {
            return Err(CatalogError::validation("grid.baseColumns must be at least 1"));
        }
        if wide_columns < base_columns {
            return Err(CatalogError::validation(format!(
                "grid.wideColumns ({wide_columns}) must not be below grid.baseColumns ({base_columns})"
            )));
        }
        if self.expanded_glyph == self.collapsed_glyph {
            return Err(CatalogError::validation(
                "expandedGlyph and collapsedGlyph must differ",
            ));
        }
        Ok(())
    }
}
