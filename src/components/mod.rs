mod back_to_top;
mod contact_form;
mod header;
mod observe;
mod preloader;
mod project_card;
mod project_grid;
mod projects;
mod projects_placeholder;
mod reveal;
mod scroll_progress;
mod skills;
mod theme_toggle;
mod typing_text;

pub use back_to_top::BackToTop;
pub use contact_form::ContactForm;
pub use header::Header;
pub use preloader::Preloader;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use projects::ProjectsSection;
pub use projects_placeholder::ProjectsPlaceholder;
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
pub use skills::SkillsSection;
pub use theme_toggle::ThemeToggle;
pub use typing_text::TypingText;
