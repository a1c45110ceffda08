use std::time::Duration;

/// Delay between steps while revealing characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(120);

/// Delay between steps while deleting characters.
pub const DELETE_DELAY: Duration = Duration::from_millis(60);

/// Extra steps past the end of a phrase, so the full text holds on
/// screen before deletion starts.
const PAUSE_PADDING: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Looping type/delete animation over a fixed phrase list.
///
/// The machine alternates between growing a character prefix of the
/// current phrase and shrinking it back to nothing, then moves to the
/// next phrase cyclically. Each `step` advances one character and
/// reports the delay until the next step should run.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    roles: &'static [&'static str],
    role_index: usize,
    char_index: usize,
    phase: Phase,
}

impl TypingAnimator {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            role_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    fn current_role(&self) -> &'static str {
        self.roles.get(self.role_index).copied().unwrap_or("")
    }

    /// The currently displayed prefix. Clipped to the phrase length,
    /// so the text plateaus while `char_index` runs through the pause
    /// padding.
    pub fn visible_text(&self) -> String {
        self.current_role().chars().take(self.char_index).collect()
    }

    /// Advances one character and returns the delay before the next
    /// step, chosen from the phase the machine lands in.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                self.char_index += 1;
                if self.char_index >= self.current_role().chars().count() + PAUSE_PADDING {
                    self.phase = Phase::Deleting;
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::Typing;
                    self.role_index = (self.role_index + 1) % self.roles.len().max(1);
                }
            }
        }

        match self.phase {
            Phase::Typing => TYPE_DELAY,
            Phase::Deleting => DELETE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[&str] = &["abc", "wxyz"];

    #[test]
    fn reveals_one_character_per_step() {
        let mut animator = TypingAnimator::new(ROLES);

        animator.step();
        assert_eq!(animator.visible_text(), "a");
        animator.step();
        assert_eq!(animator.visible_text(), "ab");
        animator.step();
        assert_eq!(animator.visible_text(), "abc");
    }

    #[test]
    fn full_phrase_holds_during_pause_padding() {
        let mut animator = TypingAnimator::new(ROLES);

        // Three characters plus the padding steps, all showing "abc".
        for _ in 0..3 {
            animator.step();
        }
        for _ in 0..4 {
            animator.step();
            assert_eq!(animator.visible_text(), "abc");
        }
    }

    #[test]
    fn deletion_runs_at_the_faster_delay() {
        let mut animator = TypingAnimator::new(ROLES);

        let mut delay = TYPE_DELAY;
        for _ in 0..8 {
            delay = animator.step();
        }
        assert_eq!(delay, DELETE_DELAY);
        assert_eq!(animator.visible_text(), "abc");
    }

    #[test]
    fn one_cycle_advances_to_the_next_phrase() {
        let mut animator = TypingAnimator::new(ROLES);

        // Type "abc" (3) + pause (5) + delete back down (8).
        for _ in 0..16 {
            animator.step();
        }

        assert_eq!(animator.role_index(), 1);
        assert_eq!(animator.char_index(), 0);
        assert_eq!(animator.visible_text(), "");

        // The next step starts revealing the second phrase.
        animator.step();
        assert_eq!(animator.visible_text(), "w");
    }

    #[test]
    fn phrase_index_wraps_around() {
        let mut animator = TypingAnimator::new(ROLES);

        // One full cycle per phrase: (3+5)*2 and (4+5)*2 steps.
        for _ in 0..16 + 18 {
            animator.step();
        }

        assert_eq!(animator.role_index(), 0);
        assert_eq!(animator.char_index(), 0);
    }

    #[test]
    fn empty_phrase_list_never_panics() {
        let mut animator = TypingAnimator::new(&[]);
        assert!(animator.is_empty());

        for _ in 0..20 {
            animator.step();
            assert_eq!(animator.visible_text(), "");
        }
    }
}
