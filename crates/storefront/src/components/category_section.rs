use vitrine_catalog::Category;
use vitrine_core::Entity;

use crate::components::product_card;
use crate::event::Action;
use crate::node::{Element, NodeKey, Tag, ViewNode};
use crate::state::Expansion;
use crate::theme::Theme;

/// Render one category section in the given expansion state.
///
/// The header button is the section's only activatable node. While collapsed
/// the product list is not built at all.
pub fn category_section(category: &Category, expansion: Expansion, theme: &Theme) -> ViewNode {
    let classes = &theme.classes;
    let glyph = expansion.glyph(theme);

    let header = Element::new(Tag::Button)
        .class(&classes.header)
        .attr("type", "button")
        .attr("aria-expanded", expansion.is_expanded().to_string())
        .action(Action::ToggleCategory(category.id().clone()))
        .child(
            Element::new(Tag::H2)
                .class(&classes.header_title)
                .text(header_title(category)),
        )
        .child(
            Element::new(Tag::I)
                .class(&classes.toggle)
                .class(&format!("icon-{glyph}"))
                .attr("data-icon", glyph),
        );

    let mut section = Element::new(Tag::Section)
        .key(NodeKey::Category(category.id().clone()))
        .class(&classes.section)
        .child(header);

    if expansion.is_expanded() {
        section = section.child(
            Element::new(Tag::Div).class(&classes.product_list).children(
                category
                    .products()
                    .iter()
                    .enumerate()
                    .map(|(position, product)| product_card(product, position, theme)),
            ),
        );
    }

    section.into()
}

/// `emoji title emoji`, skipping an empty emoji.
fn header_title(category: &Category) -> String {
    let emoji = category.emoji();
    if emoji.is_empty() {
        category.title().to_string()
    } else {
        format!("{emoji} {} {emoji}", category.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::Product;
    use vitrine_core::CategoryId;

    fn teas() -> Category {
        Category::new(CategoryId::new("green").unwrap(), "GREEN", "🍵")
            .with_product(Product::new("Sencha").with_tier("50 g", "€6"))
            .with_product(Product::new("Matcha").with_badge("Premium"))
    }

    #[test]
    fn expanded_section_lists_cards_in_order() {
        let node = category_section(&teas(), Expansion::Expanded, &Theme::default());

        let cards = node.find_by_class("card");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].node_key(), Some(&NodeKey::Index(0)));
        assert_eq!(cards[1].node_key(), Some(&NodeKey::Index(1)));

        let text = node.text_content();
        assert!(text.find("Sencha").unwrap() < text.find("Matcha").unwrap());
    }

    #[test]
    fn header_shows_emoji_on_both_sides_and_glyph() {
        let node = category_section(&teas(), Expansion::Expanded, &Theme::default());

        let header = node.find_by_class("text-xl")[0];
        assert_eq!(header.child_nodes(), [ViewNode::text("🍵 GREEN 🍵")]);

        let toggle = node.find_by_class("toggle")[0];
        assert_eq!(toggle.attr_value("data-icon"), Some("chevron-up"));
    }

    #[test]
    fn header_is_the_only_trigger() {
        let node = category_section(&teas(), Expansion::Expanded, &Theme::default());
        let id = CategoryId::new("green").unwrap();

        assert_eq!(node.actions(), vec![&Action::ToggleCategory(id.clone())]);
        let section = node.as_element().unwrap();
        assert_eq!(section.node_key(), Some(&NodeKey::Category(id)));
        assert_eq!(section.child_elements().next().map(Element::tag), Some(Tag::Button));
    }

    #[test]
    fn collapsed_section_has_no_product_subtree() {
        let node = category_section(&teas(), Expansion::Collapsed, &Theme::default());

        assert!(node.find_by_class("card").is_empty());
        assert!(node.find_by_class("space-y-4").is_empty());
        assert!(!node.text_content().contains("Sencha"));
        assert_eq!(node.as_element().unwrap().child_nodes().len(), 1);

        let toggle = node.find_by_class("toggle")[0];
        assert_eq!(toggle.attr_value("data-icon"), Some("chevron-down"));
        let button = node.find_by_class("rounded-xl")[0];
        assert_eq!(button.attr_value("aria-expanded"), Some("false"));
    }

    #[test]
    fn empty_emoji_leaves_plain_title() {
        let category = Category::new(CategoryId::new("misc").unwrap(), "MISC", "");
        let node = category_section(&category, Expansion::Expanded, &Theme::default());
        assert_eq!(
            node.find_by_class("text-xl")[0].child_nodes(),
            [ViewNode::text("MISC")]
        );
    }
}
