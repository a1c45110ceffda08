use leptos::prelude::*;

use super::observe::observe_once;

/// Visibility threshold at which a section counts as revealed.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Wraps content in a `.reveal` container that gains `reveal-visible`
/// the first time it is at least 10% inside the viewport. One-shot:
/// scrolling away never takes the class back off.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if let Some(element) = node.get() {
            observe_once(&element, REVEAL_THRESHOLD, move || revealed.set(true));
        }
    });

    view! {
        <div
            class=move || if revealed.get() { "reveal reveal-visible" } else { "reveal" }
            node_ref=node
        >
            {children()}
        </div>
    }
}
