mod stages;

use std::fmt;

use crate::error::domain_error::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maps the 1-based menu level to a difficulty.
    pub fn from_level(level: usize) -> Result<Self, DomainError> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(DomainError::UnknownDifficultyLevel(other)),
        }
    }

    pub fn from_max_mistakes(max_mistakes: u8) -> Result<Self, DomainError> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.max_mistakes() == max_mistakes)
            .ok_or(DomainError::UnsupportedDifficulty(max_mistakes))
    }

    pub fn level(&self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn max_mistakes(&self) -> u8 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 8,
            Difficulty::Hard => 6,
        }
    }

    /// Stage art indexed by mistake count, `max_mistakes() + 1` entries.
    pub fn stages(&self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => stages::EASY,
            Difficulty::Medium => stages::MEDIUM,
            Difficulty::Hard => stages::HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

/// Counts incorrect guesses against a fixed budget.
#[derive(Clone, Debug, PartialEq)]
pub struct MistakeTracker {
    mistakes: u8,
    max_mistakes: u8,
}

impl MistakeTracker {
    pub fn new(max_mistakes: u8) -> Self {
        MistakeTracker {
            mistakes: 0,
            max_mistakes,
        }
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn max_mistakes(&self) -> u8 {
        self.max_mistakes
    }

    pub fn remaining(&self) -> u8 {
        self.max_mistakes - self.mistakes
    }

    /// Saturates at `max_mistakes`.
    pub fn increment(&mut self) {
        if self.mistakes < self.max_mistakes {
            self.mistakes += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.mistakes == self.max_mistakes
    }

    pub fn stage_index(&self) -> usize {
        self.mistakes.into()
    }

    pub fn stage(&self) -> Result<&'static str, DomainError> {
        let stages = Difficulty::from_max_mistakes(self.max_mistakes)?.stages();
        Ok(stages[self.stage_index()])
    }
}

impl From<Difficulty> for MistakeTracker {
    fn from(difficulty: Difficulty) -> Self {
        MistakeTracker::new(difficulty.max_mistakes())
    }
}

#[cfg(test)]
mod tests {
    use super::{stages, Difficulty, MistakeTracker};
    use crate::error::domain_error::DomainError;

    #[test]
    fn difficulty_levels_map_to_mistake_budgets() {
        assert_eq!(Difficulty::from_level(1).unwrap().max_mistakes(), 10);
        assert_eq!(Difficulty::from_level(2).unwrap().max_mistakes(), 8);
        assert_eq!(Difficulty::from_level(3).unwrap().max_mistakes(), 6);
        assert_eq!(
            Difficulty::from_level(4),
            Err(DomainError::UnknownDifficultyLevel(4))
        );
        assert_eq!(
            Difficulty::from_level(0),
            Err(DomainError::UnknownDifficultyLevel(0))
        );
    }

    #[test]
    fn every_difficulty_has_one_stage_per_mistake_count() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.stages().len(),
                usize::from(difficulty.max_mistakes()) + 1
            );
        }
    }

    #[test]
    fn stages_start_empty_and_end_with_the_full_figure() {
        for difficulty in Difficulty::ALL {
            let stages = difficulty.stages();
            assert_eq!(stages.first(), Some(&stages::EMPTY));
            assert_eq!(stages.last(), Some(&stages::BOTH_LEGS));
        }
    }

    #[test]
    fn medium_and_hard_skip_intermediate_frames() {
        assert!(!Difficulty::Medium.stages().contains(&stages::LEFT_ARM));
        assert!(!Difficulty::Medium.stages().contains(&stages::LEFT_LEG));
        assert!(!Difficulty::Hard.stages().contains(&stages::BASE));
        assert!(!Difficulty::Hard.stages().contains(&stages::POST));
    }

    #[test]
    fn increment_saturates_at_max_mistakes() {
        let mut tracker = MistakeTracker::new(6);

        for _ in 0..6 + 5 {
            tracker.increment();
        }

        assert_eq!(tracker.mistakes(), 6);
        assert_eq!(tracker.remaining(), 0);
        assert!(tracker.is_exhausted());
    }

    #[test]
    fn is_exhausted_becomes_true_exactly_at_max_mistakes() {
        let mut tracker = MistakeTracker::from(Difficulty::Medium);

        for _ in 0..7 {
            tracker.increment();
            assert!(!tracker.is_exhausted());
        }
        tracker.increment();

        assert!(tracker.is_exhausted());
    }

    #[test]
    fn stage_index_follows_mistake_count() {
        let mut tracker = MistakeTracker::from(Difficulty::Hard);
        assert_eq!(tracker.stage_index(), 0);
        assert_eq!(tracker.stage(), Ok(stages::EMPTY));

        tracker.increment();
        assert_eq!(tracker.stage_index(), 1);
        assert_eq!(tracker.stage(), Ok(stages::BEAM));

        for _ in 0..10 {
            tracker.increment();
        }
        assert_eq!(tracker.stage_index(), 6);
        assert_eq!(tracker.stage(), Ok(stages::BOTH_LEGS));
    }

    #[test]
    fn stage_fails_for_unsupported_budget() {
        let tracker = MistakeTracker::new(7);

        assert_eq!(tracker.stage(), Err(DomainError::UnsupportedDifficulty(7)));
    }
}
