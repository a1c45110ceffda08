use leptos::prelude::*;

use crate::scroll::progress_percent;

/// Thin bar along the top of the page tracking how far down the
/// document the viewport sits. Recomputed on every scroll event.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let percent = RwSignal::new(0.0_f64);

    window_event_listener(leptos::ev::scroll, move |_| {
        percent.set(current_percent());
    });

    view! {
        <div
            id="scroll-progress"
            class="scroll-progress"
            style:width=move || format!("{}%", percent.get())
        ></div>
    }
}

#[cfg(target_arch = "wasm32")]
fn current_percent() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()));

    progress_percent(scroll_top, doc_height, viewport)
}

#[cfg(not(target_arch = "wasm32"))]
fn current_percent() -> f64 {
    progress_percent(0.0, 0.0, 0.0)
}
