use leptos::prelude::*;

use super::ProjectCard;
use crate::github::RepoSummary;

#[component]
pub fn ProjectGrid(repos: Vec<RepoSummary>) -> impl IntoView {
    view! {
        <ul class="project-list">
            {repos
                .into_iter()
                .map(|repo| view! { <ProjectCard repo /> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art">
                // A commit trunk with nothing branched off it yet
                <line x1="80" y1="30" x2="80" y2="170" stroke="#c4b8a8" stroke-width="1.5"/>
                <circle cx="80" cy="45" r="6" fill="none" stroke="#8b7355" stroke-width="1.5"/>
                <circle cx="80" cy="100" r="6" fill="none" stroke="#8b7355" stroke-width="1.5"/>
                <circle cx="80" cy="155" r="6" fill="none" stroke="#8b7355" stroke-width="1.5"/>
                <path d="M86 100 Q120 100 130 70" fill="none" stroke="#c4b8a8"
                      stroke-width="1.5" stroke-dasharray="4 5"/>
                <circle cx="135" cy="62" r="6" fill="none" stroke="#c4b8a8"
                        stroke-width="1.5" stroke-dasharray="3 3"/>
            </svg>
            <p class="project-empty-text">"No public repositories found yet."</p>
        </div>
    }
}
