use serde::{Deserialize, Serialize};

/// One quantity/price pairing.
///
/// Both labels are opaque display strings; they are never parsed or compared
/// numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    quantity: String,
    price: String,
}

impl PriceTier {
    pub fn new(quantity: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

/// A single sellable item.
///
/// Only `name` is required. A sold-out product is still listed; the flag is a
/// display annotation, not a visibility filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    prices: Vec<PriceTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
    #[serde(default, skip_serializing_if = "core::ops::Not::not")]
    sold_out: bool,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            prices: Vec::new(),
            badge: None,
            sold_out: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Append a tier; tiers keep insertion order.
    pub fn with_tier(mut self, quantity: impl Into<String>, price: impl Into<String>) -> Self {
        self.prices.push(PriceTier::new(quantity, price));
        self
    }

    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = PriceTier>) -> Self {
        self.prices.extend(tiers);
        self
    }

    pub fn sold_out(mut self) -> Self {
        self.sold_out = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn prices(&self) -> &[PriceTier] {
        &self.prices
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn is_sold_out(&self) -> bool {
        self.sold_out
    }
}
