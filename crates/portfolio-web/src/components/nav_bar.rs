use leptos::prelude::*;

use crate::scroll_spy::{ScrollSpy, link_class};

/// Fixed top bar with the owner's name and one link per page section. Each
/// link's class follows the spy's highlight state.
#[component]
pub fn NavBar(#[prop(into)] brand: String, spy: ScrollSpy) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 w-full backdrop-blur bg-white/70 z-50 shadow-sm">
            <div class="max-w-5xl mx-auto flex items-center justify-between p-4">
                <span class="text-xl font-bold tracking-tight">{brand}</span>
                <ul class="flex gap-6 text-sm font-medium">
                    {spy.links().iter().map(|link| {
                        let id = link.id;
                        view! {
                            <li>
                                <a href=link.href() class=move || link_class(spy.is_active(id))>
                                    {link.label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </nav>
    }
}
