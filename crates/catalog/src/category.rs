use serde::{Deserialize, Serialize};

use vitrine_core::{CategoryId, Entity};

use crate::product::Product;

/// A named, collapsible grouping of products.
///
/// `emoji` is decorative and placed on both sides of the title. `icon` names an
/// opaque glyph for hosts that draw one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default)]
    products: Vec<Product>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            emoji: emoji.into(),
            icon: None,
            products: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
