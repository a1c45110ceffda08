use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::typing::TypingAnimator;

/// Hero strapline with the looping type/delete animation.
///
/// The animator state machine lives in a `StoredValue`; each tick
/// advances it, publishes the visible prefix, and reschedules itself
/// with the delay the machine asks for. The loop runs until the
/// owning scope is disposed.
#[component]
pub fn TypingText() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (text, set_text) = signal(String::new());
    let animator = StoredValue::new(TypingAnimator::new(config.roles));

    Effect::new(move || {
        if animator.with_value(TypingAnimator::is_empty) {
            return;
        }
        tick(animator, set_text);
    });

    view! {
        <span id="typing-text" class="typing-text" aria-live="polite">
            {text}
            <span class="typing-cursor" aria-hidden="true">"|"</span>
        </span>
    }
}

fn tick(animator: StoredValue<TypingAnimator>, set_text: WriteSignal<String>) {
    let Some(delay) = next_delay(animator.try_update_value(TypingAnimator::step)) else {
        return;
    };
    let Some(shown) = animator.try_with_value(TypingAnimator::visible_text) else {
        return;
    };
    set_text.set(shown);
    Timeout::new(delay, move || tick(animator, set_text)).forget();
}

/// Millisecond delay for the next tick. `None` once the animator's
/// scope has been disposed: the loop must end there, not re-arm.
fn next_delay(step: Option<Duration>) -> Option<u32> {
    let delay = step?;
    Some(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
}
