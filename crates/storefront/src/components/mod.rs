//! Renderers, leaf-first: price grid → product card → category section →
//! catalog root. Each is a pure function of its input, the theme and (for
//! sections) the section's expansion state.

pub mod catalog_root;
pub mod category_section;
pub mod contact_strip;
pub mod price_grid;
pub mod product_card;

pub use catalog_root::catalog_root;
pub use category_section::category_section;
pub use contact_strip::contact_strip;
pub use price_grid::price_grid;
pub use product_card::product_card;
