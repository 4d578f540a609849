use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::pages::PortfolioPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! { <PortfolioPage /> }
}

/// Document shell rendered around [`App`] by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href="/pkg/portfolio-web.css" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <leptos_meta::MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
