use vitrine_catalog::Product;

use crate::components::price_grid;
use crate::node::{Element, NodeKey, Tag, ViewNode};
use crate::theme::Theme;

/// Render one product card, keyed by its position within the category.
///
/// Element order is fixed: title, badge chip, sold-out chip, description,
/// price grid. Absent optional fields are omitted. A sold-out card is dimmed
/// but otherwise rendered in full.
pub fn product_card(product: &Product, position: usize, theme: &Theme) -> ViewNode {
    let classes = &theme.classes;
    let marker = &theme.attention_marker;

    let mut heading = Element::new(Tag::Div).class(&classes.card_heading).child(
        Element::new(Tag::H3)
            .class(&classes.card_title)
            .text(format!("{marker} {} {marker}", product.name())),
    );
    if let Some(badge) = product.badge() {
        heading = heading.child(Element::new(Tag::Span).class(&classes.badge).text(badge));
    }
    if product.is_sold_out() {
        heading = heading.child(
            Element::new(Tag::Span)
                .class(&classes.sold_out)
                .text(theme.sold_out_label.as_str()),
        );
    }

    let mut header = Element::new(Tag::Header)
        .class(&classes.card_header)
        .child(heading);
    if let Some(description) = product.description() {
        header = header.child(
            Element::new(Tag::P)
                .class(&classes.description)
                .text(description),
        );
    }

    let mut card = Element::new(Tag::Div)
        .key(NodeKey::Index(position))
        .class(&classes.card);
    if product.is_sold_out() {
        card = card.class(&classes.card_dimmed).attr("data-sold-out", "true");
    }

    card.child(header)
        .child(
            Element::new(Tag::Div)
                .class(&classes.card_content)
                .child(price_grid(product.prices(), theme)),
        )
        .into()
}
