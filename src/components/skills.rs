use leptos::prelude::*;

use super::observe::observe_once;
use crate::config::{Skill, SiteConfig};

/// Visibility threshold at which the meters start animating.
const METERS_THRESHOLD: f64 = 0.3;

/// Skill section with animated meter bars. The fills sit at zero
/// until the section is 30% visible, then animate to their targets.
/// The observation is one-shot; the widths never reset.
#[component]
pub fn SkillsSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let animated = RwSignal::new(false);
    let section = NodeRef::<leptos::html::Section>::new();

    Effect::new(move || {
        if let Some(element) = section.get() {
            observe_once(&element, METERS_THRESHOLD, move || animated.set(true));
        }
    });

    view! {
        <section id="skills" class="skills" node_ref=section>
            <h2>"Skills"</h2>
            <ul class="skill-list">
                {config
                    .skills
                    .iter()
                    .map(|skill| {
                        view! { <SkillMeter skill=*skill animated=animated.read_only() /> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
fn SkillMeter(skill: Skill, animated: ReadSignal<bool>) -> impl IntoView {
    let width = move || {
        if animated.get() {
            format!("{}%", skill.level)
        } else {
            "0%".to_string()
        }
    };

    view! {
        <li class="skill">
            <span class="skill-name">{skill.name}</span>
            <div class="meter">
                <div
                    class="meter-fill"
                    data-level=skill.level.to_string()
                    style:width=width
                ></div>
            </div>
        </li>
    }
}
