pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod scroll_spy;

/// Client entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    // Enables the hidden starting state of entrance animations
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if root.class_list().add_1("motion").is_err() {
            leptos::logging::warn!("could not enable entrance animations");
        }
    }

    leptos::mount::hydrate_body(app::App);
}
