use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long the hide transition gets before the node is dropped, in
/// milliseconds.
const REMOVE_DELAY_MS: u32 = 500;

/// Full-page loading overlay. Fades out as soon as the app mounts and
/// leaves the tree entirely half a second later.
#[component]
pub fn Preloader() -> impl IntoView {
    let hidden = RwSignal::new(false);
    let gone = RwSignal::new(false);

    Effect::new(move || {
        hidden.set(true);
        Timeout::new(REMOVE_DELAY_MS, move || gone.set(true)).forget();
    });

    move || {
        (!gone.get()).then(|| {
            view! {
                <div
                    id="preloader"
                    class=move || {
                        if hidden.get() { "preloader hide-preloader" } else { "preloader" }
                    }
                >
                    <div class="preloader-spinner" aria-hidden="true"></div>
                </div>
            }
        })
    }
}
