#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score, combo and clock of one game instance.
///
/// The high score lives only as long as the instance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub high_score: u32,
    /// Consecutive correct answers.
    pub combo: u32,
    /// Seconds remaining.
    pub time_left: u32,
    /// Memory level, starting at 1.
    pub level: u32,
}

impl ScoreState {
    pub fn new(high_score: u32, time_limit: u32) -> Self {
        Self {
            score: 0,
            high_score,
            combo: 0,
            time_left: time_limit,
            level: 1,
        }
    }

    /// Clear everything but the high score for a fresh game.
    pub fn reset(&mut self, time_limit: u32) {
        *self = Self::new(self.high_score, time_limit);
    }

    /// Correct answer worth `points`. Returns the new combo.
    pub fn hit(&mut self, points: u32) -> u32 {
        self.score += points;
        self.combo += 1;
        self.combo
    }

    pub fn break_combo(&mut self) {
        self.combo = 0;
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// One second off the clock. Returns true once time has run out.
    pub fn tick(&mut self) -> bool {
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left == 0
    }

    /// Fold the final score into the high score. Returns true on a record.
    pub fn settle(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combo_counts_and_resets() {
        let mut state = ScoreState::new(100, 60);
        assert_eq!(state.hit(10), 1);
        assert_eq!(state.hit(12), 2);
        state.break_combo();
        assert_eq!(state.combo, 0);
        assert_eq!(state.score, 22);
    }

    #[test]
    fn record_only_when_beaten() {
        let mut state = ScoreState::new(100, 60);
        state.add_points(100);
        assert!(!state.settle());
        state.add_points(1);
        assert!(state.settle());
        assert_eq!(state.high_score, 101);

        state.reset(30);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 101);
        assert_eq!(state.time_left, 30);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn clock_stops_at_zero() {
        let mut state = ScoreState::new(0, 2);
        assert!(!state.tick());
        assert!(state.tick());
        assert!(state.tick());
        assert_eq!(state.time_left, 0);
    }
}
