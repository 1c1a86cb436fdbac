use vitrine_catalog::ContactLink;

use crate::node::{Element, NodeKey, Tag, ViewNode};
use crate::theme::Theme;

/// A row of outbound links; `None` when there is nothing to show.
pub fn contact_strip(contacts: &[ContactLink], theme: &Theme) -> Option<ViewNode> {
    if contacts.is_empty() {
        return None;
    }

    let classes = &theme.classes;
    let nav = Element::new(Tag::Nav)
        .class(&classes.contacts)
        .children(contacts.iter().enumerate().map(|(position, link)| {
            Element::new(Tag::A)
                .key(NodeKey::Index(position))
                .class(&classes.contact_link)
                .class(link.style())
                .attr("href", link.url())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(
                    Element::new(Tag::I)
                        .class(&format!("icon-{}", link.icon()))
                        .attr("data-icon", link.icon()),
                )
                .child(Element::new(Tag::Span).text(link.name()))
        }));

    Some(nav.into())
}
