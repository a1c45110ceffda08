use leptos::prelude::*;

use crate::github::RepoSummary;

fn format_number(n: i32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}m", f64::from(n) / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", f64::from(n) / 1_000.0)
    } else {
        n.to_string()
    }
}

#[component]
pub fn ProjectCard(repo: RepoSummary) -> impl IntoView {
    let description = repo
        .description
        .unwrap_or_else(|| "No description provided.".to_string());

    view! {
        <li class="project-card">
            <article class="github-project-card card-glow">
                <h4>{repo.name}</h4>
                <p class="project-description">{description}</p>
                <div class="github-meta">
                    <span class="github-meta-stat" title="Stars">
                        <StarIcon />
                        {format_number(repo.stars)}
                    </span>
                    <span class="github-meta-stat" title="Forks">
                        <ForkIcon />
                        {format_number(repo.forks)}
                    </span>
                </div>
                <a href=repo.url target="_blank" rel="noopener noreferrer">
                    "View Repository"
                </a>
            </article>
        </li>
    }
}

#[component]
fn StarIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
        </svg>
    }
}

#[component]
fn ForkIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <circle cx="6" cy="6" r="3"/>
            <circle cx="18" cy="6" r="3"/>
            <circle cx="12" cy="18" r="3"/>
            <path d="M6 9v2a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V9"/>
            <line x1="12" y1="13" x2="12" y2="15"/>
        </svg>
    }
}
