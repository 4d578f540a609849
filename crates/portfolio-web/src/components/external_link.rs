use leptos::prelude::*;

/// Link that opens in a new browsing context without navigating the page.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    /// Accessible name, for icon-only links
    #[prop(optional, into)]
    label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noreferrer" class=class aria-label=label>
            {children()}
        </a>
    }
}
