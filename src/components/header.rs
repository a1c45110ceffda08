use leptos::prelude::*;

use super::{ThemeToggle, TypingText};
use crate::config::SiteConfig;

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <header class="header hero">
            <div class="header__bar">
                <h1 class="header__name">{config.owner}</h1>
                <ThemeToggle />
            </div>
            <p class="header__tagline">
                <TypingText />
            </p>
        </header>
    }
}
