/// Compile-time site configuration.
///
/// A client-side bundle has no process environment to read from, so
/// everything the page needs is baked in and handed to components
/// through context.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    /// Display name shown in the header.
    pub owner: &'static str,

    /// GitHub account whose public repositories are listed.
    pub github_user: &'static str,

    /// Cap on how many repositories are fetched and rendered.
    pub project_limit: u8,

    /// Phrases cycled by the hero typing animation.
    pub roles: &'static [&'static str],

    /// Skill meters, in display order.
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Target fill, 0..=100.
    pub level: u8,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Chandra Pasupuleti",
            github_user: "PasupuletiC",
            project_limit: 6,
            roles: &[
                "Machine Learning Enthusiast",
                "AI Builder & Problem Solver",
                "Python & Deep Learning Developer",
                "Hackathon & Project-driven Learner",
            ],
            skills: &[
                Skill { name: "Python", level: 90 },
                Skill { name: "Machine Learning", level: 85 },
                Skill { name: "Deep Learning", level: 80 },
                Skill { name: "Data Analysis", level: 75 },
                Skill { name: "SQL", level: 70 },
            ],
        }
    }
}
