use leptos::prelude::*;

use super::{ProjectGrid, ProjectGridEmpty, ProjectsPlaceholder};
use crate::config::SiteConfig;
use crate::github::{GitHubClient, RepoSummary};

#[derive(Debug, Clone)]
enum ProjectsState {
    Loading,
    Ready(Vec<RepoSummary>),
    Failed,
}

/// GitHub projects section. Fires one best-effort fetch on mount;
/// every failure mode collapses into the same static fallback, with
/// the detail going to the console only. Nothing re-fetches short of
/// a full page reload.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(ProjectsState::Loading);

    Effect::new(move || {
        let client = GitHubClient::new(config.github_user, config.project_limit);
        leptos::task::spawn_local(async move {
            match client.fetch_recent().await {
                Ok(repos) => state.set(ProjectsState::Ready(repos)),
                Err(error) => {
                    leptos::logging::error!("failed to load GitHub projects: {error}");
                    state.set(ProjectsState::Failed);
                }
            }
        });
    });

    view! {
        <section id="projects" class="projects">
            <h2>"Projects"</h2>
            <div id="github-projects" class="github-projects">
                {move || match state.get() {
                    ProjectsState::Loading => view! { <ProjectsPlaceholder /> }.into_any(),
                    ProjectsState::Ready(repos) if repos.is_empty() => {
                        view! { <ProjectGridEmpty /> }.into_any()
                    }
                    ProjectsState::Ready(repos) => view! { <ProjectGrid repos /> }.into_any(),
                    ProjectsState::Failed => {
                        view! {
                            <p class="error">"Unable to load GitHub projects right now."</p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
