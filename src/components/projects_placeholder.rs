use leptos::prelude::*;

#[component]
pub fn ProjectsPlaceholder() -> impl IntoView {
    view! {
        <div class="projects-placeholder">
            <svg viewBox="0 0 400 240" class="placeholder-art" aria-label="Network graph illustration">
                <defs>
                    <linearGradient id="edgeGrad" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" style="stop-color:#8b7355;stop-opacity:0.15" />
                        <stop offset="50%" style="stop-color:#c4b8a8;stop-opacity:0.55" />
                        <stop offset="100%" style="stop-color:#8b7355;stop-opacity:0.15" />
                    </linearGradient>
                </defs>

                // Edges, input layer to hidden layer
                <line x1="70" y1="60" x2="200" y2="40" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="70" y1="60" x2="200" y2="120" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="70" y1="120" x2="200" y2="40" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="70" y1="120" x2="200" y2="200" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="70" y1="180" x2="200" y2="120" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="70" y1="180" x2="200" y2="200" stroke="url(#edgeGrad)" stroke-width="1"/>

                // Edges, hidden layer to output
                <line x1="200" y1="40" x2="330" y2="90" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="200" y1="120" x2="330" y2="90" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="200" y1="120" x2="330" y2="150" stroke="url(#edgeGrad)" stroke-width="1"/>
                <line x1="200" y1="200" x2="330" y2="150" stroke="url(#edgeGrad)" stroke-width="1"/>

                // Input nodes
                <circle cx="70" cy="60" r="7" fill="#8b7355" fill-opacity="0.5"/>
                <circle cx="70" cy="120" r="7" fill="#8b7355" fill-opacity="0.5"/>
                <circle cx="70" cy="180" r="7" fill="#8b7355" fill-opacity="0.5"/>

                // Hidden nodes
                <circle cx="200" cy="40" r="9" fill="#c4b8a8" fill-opacity="0.6"/>
                <circle cx="200" cy="120" r="9" fill="#c4b8a8" fill-opacity="0.6"/>
                <circle cx="200" cy="200" r="9" fill="#c4b8a8" fill-opacity="0.6"/>

                // Output nodes
                <circle cx="330" cy="90" r="7" fill="#8b7355" fill-opacity="0.7"/>
                <circle cx="330" cy="150" r="7" fill="#8b7355" fill-opacity="0.7"/>
            </svg>
            <p class="placeholder-text">"Loading projects from GitHub..."</p>
        </div>
    }
}
