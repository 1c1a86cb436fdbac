//! `vitrine-storefront`
//!
//! **Responsibility:** turn an immutable catalog into an interactive view.
//!
//! This crate provides:
//! - A host-independent view tree ([`ViewNode`])
//! - Per-category expansion state, toggled by header activation
//! - The renderers (price grid, product card, category section, catalog root)
//! - The [`Storefront`] facade tying catalog, theme and state together
//! - A Leptos CSR frontend (wasm32 only)

pub mod components;
pub mod event;
pub mod node;
pub mod state;
pub mod storefront;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use event::{Action, UiEvent};
pub use node::{Element, NodeKey, Tag, ViewNode};
pub use state::{CatalogState, Expansion};
pub use storefront::Storefront;
pub use theme::{ClassTokens, GridLayout, Theme};
