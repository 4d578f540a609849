use leptos::either::Either;
use leptos::html;
use leptos::prelude::*;

pub const BUTTON_BASE_CLASS: &str = "px-4 py-2 rounded-md bg-sky-600 text-white hover:bg-sky-700 transition";

/// Default classes followed by the caller's. Caller classes never replace the
/// defaults.
pub fn button_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        BUTTON_BASE_CLASS.to_string()
    } else {
        format!("{} {}", BUTTON_BASE_CLASS, extra)
    }
}

/// Styled clickable element. Renders `<a>` when `as_child` is set, `<button>`
/// otherwise. `attr:*` and `on:*` given at the call site are forwarded to the
/// rendered element unchanged, including `type`.
#[component]
pub fn Button(
    /// Render an anchor instead of a native button
    #[prop(optional)]
    as_child: bool,
    /// Extra classes appended to the defaults
    #[prop(optional, into)]
    class: String,
    /// Link target when rendered as an anchor
    #[prop(optional, into)]
    href: Option<String>,
    /// Handle to the `<button>` element
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Button>>,
    /// Handle to the `<a>` element
    #[prop(optional)]
    anchor_ref: Option<NodeRef<html::A>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(&class);

    if as_child {
        let anchor_ref = anchor_ref.unwrap_or_else(NodeRef::new);
        Either::Left(view! {
            <a node_ref=anchor_ref href=href class=class>
                {children()}
            </a>
        })
    } else {
        let node_ref = node_ref.unwrap_or_else(NodeRef::new);
        Either::Right(view! {
            <button node_ref=node_ref class=class>
                {children()}
            </button>
        })
    }
}
