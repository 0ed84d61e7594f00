//! What makes each game mode different.
//!
//! The engine is shared; a mode only supplies its alphabet, timing,
//! scoring and key mapping through [`Rules`].

use std::fmt::Debug;
use std::time::Duration;

use crate::game::phase::{Arrow, GamePhase, ModeKind};
use crate::game::score::ScoreState;
use crate::synth::{Direction, FrequencyClass, Instrument, SoundId};

/// How rounds are paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStyle {
    /// One stimulus at a time, answered with one key.
    Single {
        /// Time to answer before it counts as a miss.
        response_window: Duration,
        /// Gap between a judged stimulus and the next one.
        next_delay: Duration,
    },
    /// A growing sequence played back, then repeated by the player.
    Sequence {
        /// Gap before the first level, and before each level after a success.
        lead_in: Duration,
        /// Gap between the level announcement and the first element.
        first_step: Duration,
        /// Gap between sequence elements.
        step: Duration,
        /// Gap between the last element and the player's turn.
        answer_delay: Duration,
        /// Longest sequence a level can ask for.
        max_length: usize,
    },
}

/// Per-mode behavior plugged into [`GameEngine`](crate::game::GameEngine).
pub trait Rules {
    /// What the player hears and answers with.
    type Token: Copy + Eq + Debug + Into<SoundId> + 'static;

    const KIND: ModeKind;
    /// Stimuli are drawn uniformly from this set.
    const ALPHABET: &'static [Self::Token];
    /// Phases this mode passes through.
    const PHASES: &'static [GamePhase];
    const STYLE: RoundStyle;
    const INITIAL_HIGH_SCORE: u32;

    /// Points for a correct answer, given the state before it is applied.
    fn award(score: &ScoreState, reaction: Duration) -> u32;

    /// Key to token. `None` for keys this mode ignores.
    fn token(arrow: Arrow) -> Option<Self::Token>;

    /// Whether `answer` counts as correct for `expected`.
    fn judge(expected: Self::Token, answer: Self::Token) -> bool {
        expected == answer
    }

    /// Whether reaching `combo` is announced.
    fn combo_milestone(combo: u32) -> bool {
        combo > 0 && combo % 5 == 0
    }

    fn has_ready_phase() -> bool {
        Self::PHASES.contains(&GamePhase::Ready)
    }
}

/// Press the arrow matching the side a tone comes from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rhythm;

impl Rules for Rhythm {
    type Token = Direction;

    const KIND: ModeKind = ModeKind::Rhythm;
    const ALPHABET: &'static [Direction] = &Direction::ALL;
    const PHASES: &'static [GamePhase] = &[
        GamePhase::Intro,
        GamePhase::Ready,
        GamePhase::Playing,
        GamePhase::Paused,
        GamePhase::Resuming,
        GamePhase::GameOver,
    ];
    const STYLE: RoundStyle = RoundStyle::Single {
        response_window: Duration::from_millis(1_500),
        next_delay: Duration::from_millis(500),
    };
    const INITIAL_HIGH_SCORE: u32 = 950;

    fn award(score: &ScoreState, _reaction: Duration) -> u32 {
        10 + score.combo * 2
    }

    fn token(arrow: Arrow) -> Option<Direction> {
        match arrow {
            Arrow::Left => Some(Direction::Left),
            Arrow::Up => Some(Direction::Center),
            Arrow::Right => Some(Direction::Right),
            Arrow::Down => None,
        }
    }
}

/// Tell high from low as fast as possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Precision;

impl Precision {
    /// Extra points for a fast answer.
    pub fn reaction_bonus(reaction: Duration) -> u32 {
        let millis = reaction.as_millis();
        if millis < 500 {
            10
        } else if millis < 1_000 {
            5
        } else {
            0
        }
    }
}

impl Rules for Precision {
    type Token = FrequencyClass;

    const KIND: ModeKind = ModeKind::Precision;
    const ALPHABET: &'static [FrequencyClass] = &FrequencyClass::ALL;
    const PHASES: &'static [GamePhase] = Rhythm::PHASES;
    const STYLE: RoundStyle = RoundStyle::Single {
        response_window: Duration::from_secs(3),
        next_delay: Duration::from_secs(1),
    };
    const INITIAL_HIGH_SCORE: u32 = 1_000;

    fn award(score: &ScoreState, reaction: Duration) -> u32 {
        15 + score.combo * 3 + Self::reaction_bonus(reaction)
    }

    fn token(arrow: Arrow) -> Option<FrequencyClass> {
        match arrow {
            Arrow::Left => Some(FrequencyClass::High),
            Arrow::Right => Some(FrequencyClass::Low),
            Arrow::Up | Arrow::Down => None,
        }
    }

    // Announced on the answer after every fifth: 6, 11, 16...
    fn combo_milestone(combo: u32) -> bool {
        combo > 1 && (combo - 1) % 5 == 0
    }
}

/// Repeat a sequence of instruments that grows every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Memory;

impl Memory {
    /// Sequence length for `level`.
    pub fn sequence_length(level: u32) -> usize {
        let RoundStyle::Sequence { max_length, .. } = Self::STYLE else {
            return 0;
        };
        (2 + level as usize).min(max_length)
    }
}

impl Rules for Memory {
    type Token = Instrument;

    const KIND: ModeKind = ModeKind::Memory;
    const ALPHABET: &'static [Instrument] = &Instrument::ALL;
    const PHASES: &'static [GamePhase] = &[
        GamePhase::Intro,
        GamePhase::Playing,
        GamePhase::Listening,
        GamePhase::Inputting,
        GamePhase::Paused,
        GamePhase::Resuming,
        GamePhase::GameOver,
    ];
    const STYLE: RoundStyle = RoundStyle::Sequence {
        lead_in: Duration::from_secs(2),
        first_step: Duration::from_secs(1),
        step: Duration::from_millis(800),
        answer_delay: Duration::from_secs(1),
        max_length: 8,
    };
    const INITIAL_HIGH_SCORE: u32 = 500;

    fn award(score: &ScoreState, _reaction: Duration) -> u32 {
        score.level * 50
    }

    fn token(arrow: Arrow) -> Option<Instrument> {
        Some(match arrow {
            Arrow::Left => Instrument::Drum,
            Arrow::Up => Instrument::Trumpet,
            Arrow::Right => Instrument::Guitar,
            Arrow::Down => Instrument::Piano,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet<R: Rules>() -> &'static [R::Token] {
        R::ALPHABET
    }

    #[test]
    fn alphabets_are_static_tables() {
        assert_eq!(alphabet::<Rhythm>().len(), 3);
        assert_eq!(alphabet::<Precision>().len(), 2);
        assert_eq!(alphabet::<Memory>().len(), 4);
    }

    #[test]
    fn rhythm_award_grows_with_combo() {
        let mut score = ScoreState::new(0, 60);
        assert_eq!(Rhythm::award(&score, Duration::ZERO), 10);
        score.combo = 4;
        assert_eq!(Rhythm::award(&score, Duration::ZERO), 18);
    }

    #[test]
    fn precision_rewards_fast_answers() {
        let mut score = ScoreState::new(0, 60);
        score.combo = 2;
        assert_eq!(Precision::award(&score, Duration::from_millis(400)), 15 + 6 + 10);
        assert_eq!(Precision::award(&score, Duration::from_millis(500)), 15 + 6 + 5);
        assert_eq!(Precision::award(&score, Duration::from_millis(999)), 15 + 6 + 5);
        assert_eq!(Precision::award(&score, Duration::from_millis(1_000)), 15 + 6);
    }

    #[test]
    fn memory_length_is_capped() {
        assert_eq!(Memory::sequence_length(1), 3);
        assert_eq!(Memory::sequence_length(6), 8);
        assert_eq!(Memory::sequence_length(40), 8);

        let mut score = ScoreState::new(0, 60);
        score.level = 3;
        assert_eq!(Memory::award(&score, Duration::ZERO), 150);
    }

    #[test]
    fn milestones_per_mode() {
        let rhythm: Vec<u32> = (0..=12).filter(|&c| Rhythm::combo_milestone(c)).collect();
        assert_eq!(rhythm, vec![5, 10]);

        let precision: Vec<u32> = (0..=12).filter(|&c| Precision::combo_milestone(c)).collect();
        assert_eq!(precision, vec![6, 11]);
    }

    #[test]
    fn memory_skips_ready() {
        assert!(Rhythm::has_ready_phase());
        assert!(Precision::has_ready_phase());
        assert!(!Memory::has_ready_phase());
    }

    #[test]
    fn arrows_map_per_mode() {
        assert_eq!(Rhythm::token(Arrow::Up), Some(Direction::Center));
        assert_eq!(Rhythm::token(Arrow::Down), None);
        assert_eq!(Precision::token(Arrow::Left), Some(FrequencyClass::High));
        assert_eq!(Precision::token(Arrow::Up), None);
        assert_eq!(Memory::token(Arrow::Down), Some(Instrument::Piano));
    }
}
