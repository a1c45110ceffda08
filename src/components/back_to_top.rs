use leptos::prelude::*;

use crate::scroll::back_to_top_visible;

/// Floating button that appears once the page is scrolled past the
/// threshold and smooth-scrolls back to the top on click.
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    window_event_listener(leptos::ev::scroll, move |_| {
        visible.set(back_to_top_visible(scroll_offset()));
    });

    view! {
        <button
            id="back-to-top"
            class=move || if visible.get() { "back-to-top show" } else { "back-to-top" }
            aria-label="Back to top"
            title="Back to top"
            on:click=move |_| scroll_to_top()
        >
            <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <line x1="12" y1="19" x2="12" y2="5"/>
                <polyline points="5 12 12 5 19 12"/>
            </svg>
        </button>
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_offset() -> f64 {
    web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_offset() -> f64 {
    0.0
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}
