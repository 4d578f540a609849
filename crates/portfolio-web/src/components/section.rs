use leptos::html;
use leptos::prelude::*;

use crate::scroll_spy::ScrollSpy;

/// Page section with an anchor id. Registers itself with the `ScrollSpy` in
/// context (if any) so the navbar can track it.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();

    if let Some(spy) = use_context::<ScrollSpy>() {
        spy.register(id.clone(), node_ref);
        let registered = id.clone();
        on_cleanup(move || spy.unregister(&registered));
    }

    view! {
        <section id=id node_ref=node_ref class=class>
            {children()}
        </section>
    }
}
