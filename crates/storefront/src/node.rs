//! Host-independent view tree.
//!
//! Renderers build a [`ViewNode`] tree; hosts (the Leptos frontend, tests,
//! benchmarks) consume it. The tree prints as deterministic indented markup, so
//! two renders are identical exactly when their printed forms are.

use core::fmt::{self, Write as _};

use vitrine_core::CategoryId;

use crate::event::Action;

/// Element tags used by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Section,
    Header,
    Button,
    H2,
    H3,
    P,
    Span,
    A,
    Nav,
    I,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Section => "section",
            Tag::Header => "header",
            Tag::Button => "button",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::A => "a",
            Tag::Nav => "nav",
            Tag::I => "i",
        }
    }
}

/// Stable identity of a node among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Keyed by category id (category sections).
    Category(CategoryId),
    /// Keyed by position (product cards, price cells). Valid because lists
    /// are never reordered or filtered at runtime.
    Index(usize),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Category(id) => write!(f, "category:{id}"),
            NodeKey::Index(i) => write!(f, "index:{i}"),
        }
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    key: Option<NodeKey>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    action: Option<Action>,
    children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            action: None,
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: NodeKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Add class tokens; whitespace-separated input is split into tokens.
    pub fn class(mut self, tokens: &str) -> Self {
        self.classes
            .extend(tokens.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ViewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn node_key(&self) -> Option<&NodeKey> {
        self.key.as_ref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn on_activate(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub fn child_nodes(&self) -> &[ViewNode] {
        &self.children
    }

    /// Direct element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(ViewNode::as_element)
    }
}

/// A node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(e) => Some(e),
            ViewNode::Text(_) => None,
        }
    }

    /// All nodes in document order (pre-order, self first).
    pub fn descendants(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let ViewNode::Element(e) = node {
                stack.extend(e.children.iter().rev());
            }
        }
        out
    }

    /// All elements carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter_map(ViewNode::as_element)
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// First element with the given key, in document order.
    pub fn find_keyed(&self, key: &NodeKey) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .filter_map(ViewNode::as_element)
            .find(|e| e.key.as_ref() == Some(key))
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|n| match n {
                ViewNode::Text(t) => Some(t.as_str()),
                ViewNode::Element(_) => None,
            })
            .collect()
    }

    /// Every action reachable in this subtree, in document order.
    pub fn actions(&self) -> Vec<&Action> {
        self.descendants()
            .into_iter()
            .filter_map(ViewNode::as_element)
            .filter_map(Element::on_activate)
            .collect()
    }

    fn write_markup(&self, out: &mut impl fmt::Write, depth: usize) -> fmt::Result {
        match self {
            ViewNode::Text(text) => writeln!(out, "{}{}", "  ".repeat(depth), escape(text)),
            ViewNode::Element(e) => e.write_markup(out, depth),
        }
    }
}

impl Element {
    fn write_markup(&self, out: &mut impl fmt::Write, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let tag = self.tag.as_str();
        write!(out, "{indent}<{tag}")?;
        if !self.classes.is_empty() {
            write!(out, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            write!(out, " {name}=\"{}\"", escape(value))?;
        }
        if let Some(key) = &self.key {
            write!(out, " data-key=\"{}\"", escape(&key.to_string()))?;
        }
        if let Some(action) = &self.action {
            write!(out, " data-action=\"{}\"", escape(&action.to_string()))?;
        }
        if self.children.is_empty() {
            return writeln!(out, "></{tag}>");
        }
        writeln!(out, ">")?;
        for child in &self.children {
            child.write_markup(out, depth + 1)?;
        }
        writeln!(out, "{indent}</{tag}>")
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markup(f, 0)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markup(f, 0)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        Element::new(Tag::Div)
            .class("page  dark")
            .child(
                Element::new(Tag::Button)
                    .key(NodeKey::Category(CategoryId::new("teas").unwrap()))
                    .action(Action::ToggleCategory(CategoryId::new("teas").unwrap()))
                    .text("Teas"),
            )
            .child(Element::new(Tag::P).class("note").text("a < b & \"c\""))
            .into()
    }

    #[test]
    fn class_tokens_are_split() {
        let node = sample();
        let root = node.as_element().unwrap();
        assert_eq!(root.classes(), ["page", "dark"]);
    }

    #[test]
    fn markup_is_indented_and_escaped() {
        let expected = "\
<div class=\"page dark\">
  <button data-key=\"category:teas\" data-action=\"toggle:teas\">
    Teas
  </button>
  <p class=\"note\">
    a &lt; b &amp; &quot;c&quot;
  </p>
</div>
";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn queries_walk_in_document_order() {
        let node = sample();
        assert_eq!(node.text_content(), "Teasa < b & \"c\"");
        assert_eq!(node.find_by_class("note").len(), 1);
        assert_eq!(node.actions().len(), 1);

        let key = NodeKey::Category(CategoryId::new("teas").unwrap());
        assert_eq!(node.find_keyed(&key).map(Element::tag), Some(Tag::Button));
        assert!(node.find_keyed(&NodeKey::Index(0)).is_none());
    }

    #[test]
    fn empty_element_closes_inline() {
        let node: ViewNode = Element::new(Tag::Div).class("grid").into();
        assert_eq!(node.to_string(), "<div class=\"grid\"></div>\n");
    }
}
