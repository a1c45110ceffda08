use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::components::{
    BackToTop, ContactForm, Header, Preloader, ProjectsSection, Reveal, ScrollProgress,
    SkillsSection,
};
use crate::config::SiteConfig;
use crate::theme::{self, ColorMode, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    provide_context(config);

    // The persisted preference is read exactly once; from here on the
    // signal is the source of what the page shows.
    let initial = ColorMode::from_saved(theme::load_saved().as_deref());
    let (mode, set_mode) = signal(initial);
    provide_context(ThemeContext { mode, set_mode });

    Effect::new(move || apply_body_class(mode.get()));

    view! {
        <Title text=config.owner />

        <Preloader />
        <ScrollProgress />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage />
                </Routes>
            </main>
        </Router>

        <BackToTop />
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="container">
            <Header />
            <Reveal>
                <SkillsSection />
            </Reveal>
            <Reveal>
                <ProjectsSection />
            </Reveal>
            <Reveal>
                <ContactForm />
            </Reveal>
        </div>
    }
}

/// Mirrors the applied mode onto the `<body>` class so the stylesheet
/// can theme everything outside the mounted tree as well.
fn apply_body_class(mode: ColorMode) {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let classes = body.class_list();
            let _ = match mode {
                ColorMode::Light => classes.add_1("light-theme"),
                ColorMode::Dark => classes.remove_1("light-theme"),
            };
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mode;
}
