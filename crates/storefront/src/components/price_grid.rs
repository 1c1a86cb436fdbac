use vitrine_catalog::PriceTier;

use crate::node::{Element, NodeKey, Tag, ViewNode};
use crate::theme::Theme;

/// One cell per tier, quantity above price, in tier order.
///
/// An empty tier list yields an empty grid.
pub fn price_grid(tiers: &[PriceTier], theme: &Theme) -> ViewNode {
    let classes = &theme.classes;

    Element::new(Tag::Div)
        .class(&theme.grid.class_tokens())
        .children(tiers.iter().enumerate().map(|(position, tier)| {
            Element::new(Tag::Div)
                .key(NodeKey::Index(position))
                .class(&classes.grid_cell)
                .child(Element::new(Tag::Div).class(&classes.quantity).text(tier.quantity()))
                .child(Element::new(Tag::Div).class(&classes.price).text(tier.price()))
        }))
        .into()
}
