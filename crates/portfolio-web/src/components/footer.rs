use chrono::Datelike;
use leptos::prelude::*;

pub fn footer_text(year: i32, name: &str) -> String {
    format!("\u{00A9} {} {} \u{2013} Built with Rust, Leptos & TailwindCSS", year, name)
}

#[component]
pub fn Footer(#[prop(into)] name: String) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-6 text-center text-sm text-slate-500 bg-white">
            {footer_text(year, &name)}
        </footer>
    }
}
