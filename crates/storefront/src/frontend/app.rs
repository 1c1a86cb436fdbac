//! Leptos application: mounts the storefront view tree into the DOM.

use leptos::html::AnyElement;
use leptos::*;

use crate::event::UiEvent;
use crate::node::{Element, Tag, ViewNode};
use crate::storefront::Storefront;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    match Storefront::embedded() {
        Ok(storefront) => {
            let storefront = create_rw_signal(storefront);
            (move || storefront.with(|s| render_node(&s.render(), storefront))).into_view()
        }
        Err(err) => {
            tracing::error!(error = %err, "storefront failed to load");
            view! {
                <div class="app">
                    <p class="load-error">{format!("Catalog unavailable: {err:#}")}</p>
                </div>
            }
            .into_view()
        }
    }
}

/// Convert one view-tree node into DOM, wiring activatable nodes to the
/// storefront signal.
fn render_node(node: &ViewNode, storefront: RwSignal<Storefront>) -> View {
    match node {
        ViewNode::Text(text) => text.clone().into_view(),
        ViewNode::Element(element) => render_element(element, storefront),
    }
}

fn render_element(element: &Element, storefront: RwSignal<Storefront>) -> View {
    let mut el = html_element(element.tag());

    if !element.classes().is_empty() {
        el = el.attr("class", element.classes().join(" "));
    }
    for (name, value) in element.attrs() {
        el = el.attr(name.clone(), value.clone());
    }

    if let Some(action) = element.on_activate().cloned() {
        el = el.on(ev::click, move |_| {
            let event = UiEvent::Activate(action.clone());
            storefront.update(|s| {
                if let Err(err) = s.dispatch(event) {
                    tracing::warn!(error = %err, "activation rejected");
                }
            });
        });
    }

    for child in element.child_nodes() {
        el = el.child(render_node(child, storefront));
    }

    el.into_view()
}

fn html_element(tag: Tag) -> HtmlElement<AnyElement> {
    match tag {
        Tag::Div => html::div().into_any(),
        Tag::Section => html::section().into_any(),
        Tag::Header => html::header().into_any(),
        Tag::Button => html::button().into_any(),
        Tag::H2 => html::h2().into_any(),
        Tag::H3 => html::h3().into_any(),
        Tag::P => html::p().into_any(),
        Tag::Span => html::span().into_any(),
        Tag::A => html::a().into_any(),
        Tag::Nav => html::nav().into_any(),
        Tag::I => html::i().into_any(),
    }
}
