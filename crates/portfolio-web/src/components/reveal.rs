use leptos::html;
use leptos::prelude::*;

/// Entrance animation played once when the element scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Fade in while rising by the given number of pixels
    FadeUp(u32),
    FadeIn,
    /// Fade in from 90% scale
    ScaleIn,
    /// Fade in while sliding in from the right by the given number of pixels
    SlideLeft(u32),
}

impl Motion {
    fn class_name(self) -> &'static str {
        match self {
            Motion::FadeUp(_) => "reveal-fade-up",
            Motion::FadeIn => "reveal-fade-in",
            Motion::ScaleIn => "reveal-scale-in",
            Motion::SlideLeft(_) => "reveal-slide-left",
        }
    }

    fn shift_px(self) -> u32 {
        match self {
            Motion::FadeUp(px) | Motion::SlideLeft(px) => px,
            Motion::FadeIn | Motion::ScaleIn => 0,
        }
    }
}

/// Visible share of the element required to trigger, clamped to `[0, 1]`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn clamp_amount(amount: f64) -> f64 {
    if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) }
}

pub fn reveal_class(motion: Motion, extra: &str, visible: bool) -> String {
    let mut class = format!("reveal {}", motion.class_name());
    if visible {
        class.push_str(" is-visible");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

pub fn reveal_style(motion: Motion, duration_ms: u32, delay_ms: u32) -> String {
    format!(
        "--reveal-shift: {}px; transition-duration: {}ms; transition-delay: {}ms",
        motion.shift_px(),
        duration_ms,
        delay_ms
    )
}

/// Check if user prefers reduced motion (client-side only)
#[cfg(feature = "hydrate")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Wraps children in a `div` that animates in once `amount` of it is visible.
///
/// The hidden starting state only applies under the `motion` class that the
/// client adds to `<html>` on hydration, so server-rendered content is visible
/// without JavaScript.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(default = 0.3)] amount: f64,
    #[prop(default = 600)] duration_ms: u32,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    #[cfg(feature = "hydrate")]
    let (visible, set_visible) = signal(false);
    #[cfg(not(feature = "hydrate"))]
    let (visible, _) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let threshold = clamp_amount(amount);

        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            if prefers_reduced_motion() {
                set_visible.set(true);
                return;
            }

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let entered = entries
                        .iter()
                        .any(|e| e.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                    if entered {
                        set_visible.set(true);
                        // Plays once
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));

            let observer =
                match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                    Ok(observer) => observer,
                    Err(_) => {
                        leptos::logging::warn!("IntersectionObserver unavailable, showing content immediately");
                        set_visible.set(true);
                        return;
                    }
                };
            // The observer holds the only JS reference to the callback
            callback.forget();
            observer.observe(&el);

            let observer = StoredValue::new_local(observer);
            on_cleanup(move || observer.with_value(|o| o.disconnect()));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = amount;

    let class = move || reveal_class(motion, &class, visible.get());

    view! {
        <div node_ref=node_ref class=class style=reveal_style(motion, duration_ms, delay_ms)>
            {children()}
        </div>
    }
}
