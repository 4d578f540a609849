//! Browser tests for the scroll listener lifecycle.
//!
//! Run with: wasm-pack test --headless --chrome crates/portfolio-web --features hydrate

#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use leptos::prelude::*;
use portfolio_web::components::{NavBar, Section};
use portfolio_web::config::CONFIG;
use portfolio_web::scroll_spy::{HIGHLIGHT_CLASS, OverlapPolicy, ScrollSpy};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SECTION_HEIGHT: f64 = 2000.0;

#[component]
fn Harness() -> impl IntoView {
    let spy = ScrollSpy::provide(CONFIG.nav, OverlapPolicy::LastWins);
    spy.listen();

    view! {
        <NavBar brand="test" spy=spy />
        {CONFIG.nav.iter().map(|link| view! {
            <Section id=link.id attr:style=format!("height: {}px", SECTION_HEIGHT)>
                {link.label}
            </Section>
        }).collect_view()}
    }
}

fn document() -> web_sys::Document {
    web_sys::window().and_then(|w| w.document()).expect("document")
}

fn link(id: &str) -> web_sys::Element {
    document()
        .query_selector(&format!("a[href='#{}']", id))
        .ok()
        .flatten()
        .expect("nav link")
}

fn lit(el: &web_sys::Element) -> bool {
    el.class_list().contains(HIGHLIGHT_CLASS)
}

async fn scroll_to(y: f64) {
    let window = web_sys::window().expect("window");
    window.scroll_to_with_x_and_y(0.0, y);
    let event = web_sys::Event::new("scroll").expect("event");
    window.dispatch_event(&event).expect("dispatch");
    settle().await;
}

async fn settle() {
    gloo_timers::future::TimeoutFuture::new(50).await;
}

fn mount_parent() -> web_sys::HtmlElement {
    let parent = document()
        .create_element("div")
        .expect("div")
        .unchecked_into::<web_sys::HtmlElement>();
    document().body().expect("body").append_child(&parent).expect("append");
    parent
}

fn section_rect(id: &str) -> (f64, f64) {
    let el = document()
        .get_element_by_id(id)
        .expect("section")
        .unchecked_into::<web_sys::HtmlElement>();
    (el.offset_top() as f64, el.offset_height() as f64)
}

#[wasm_bindgen_test]
async fn mount_measures_current_scroll_position() {
    let body = document().body().expect("body");
    // Room to scroll before anything is mounted
    body.style()
        .set_property("padding-bottom", &format!("{}px", SECTION_HEIGHT * 10.0))
        .expect("padding");

    let window = web_sys::window().expect("window");
    let scroll_y = SECTION_HEIGHT * 2.5;
    window.scroll_to_with_x_and_y(0.0, scroll_y);
    // Let the browser deliver its own scroll event before the listener exists
    settle().await;

    let handle = leptos::mount::mount_to(mount_parent(), Harness);
    settle().await;

    let scroll_pos = window.scroll_y().expect("scroll_y") + 96.0;
    let current = CONFIG
        .nav
        .iter()
        .find(|l| {
            let (top, height) = section_rect(l.id);
            scroll_pos >= top && scroll_pos < top + height
        })
        .expect("a section contains the scroll position");
    assert_ne!(current.id, "hero");
    assert!(lit(&link(current.id)), "{} should be lit", current.id);
    assert!(!lit(&link("hero")));

    drop(handle);
    window.scroll_to_with_x_and_y(0.0, 0.0);
    body.style().remove_property("padding-bottom").expect("padding");
    settle().await;
}

#[wasm_bindgen_test]
async fn highlight_follows_scroll_and_stops_after_unmount() {
    let handle = leptos::mount::mount_to(mount_parent(), Harness);
    settle().await;

    let home = link("hero");
    let about = link("about");
    assert!(lit(&home));
    assert!(!lit(&about));

    scroll_to(SECTION_HEIGHT + 500.0).await;
    assert!(!lit(&home));
    assert!(lit(&about));

    drop(handle);
    scroll_to(0.0).await;

    // Detached links keep their last classes
    assert!(lit(&about));
    assert!(!lit(&home));
}
