//! Closed set of sound identifiers.
//!
//! Every clip the games can play has a tag here, grouped by what it means
//! to the player. A misspelled sound is a compile error rather than a
//! silent miss at runtime.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interface feedback cues.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiCue {
    Select,
    Confirm,
    Back,
    Info,
    Start,
    Pause,
    Resume,
    Correct,
    Wrong,
}

impl UiCue {
    pub const ALL: [UiCue; 9] = [
        UiCue::Select,
        UiCue::Confirm,
        UiCue::Back,
        UiCue::Info,
        UiCue::Start,
        UiCue::Pause,
        UiCue::Resume,
        UiCue::Correct,
        UiCue::Wrong,
    ];

    /// Tone frequency (Hz) and length (seconds).
    pub fn tone(self) -> (f32, f32) {
        match self {
            UiCue::Select => (800.0, 0.1),
            UiCue::Confirm => (1000.0, 0.2),
            UiCue::Back => (400.0, 0.15),
            UiCue::Info => (600.0, 0.25),
            UiCue::Start => (1200.0, 0.3),
            UiCue::Pause => (300.0, 0.2),
            UiCue::Resume => (900.0, 0.2),
            UiCue::Correct => (1500.0, 0.1),
            UiCue::Wrong => (200.0, 0.3),
        }
    }
}

/// Where a rhythm cue comes from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Center,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Center, Direction::Right];

    /// Stereo position: left, center and right map to -1, 0, +1.
    pub fn pan(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Center => 0.0,
            Direction::Right => 1.0,
        }
    }

    pub fn tone(self) -> (f32, f32) {
        match self {
            Direction::Left => (500.0, 0.15),
            Direction::Center => (750.0, 0.15),
            Direction::Right => (1000.0, 0.15),
        }
    }
}

/// Pitch class used by the precision mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyClass {
    High,
    Low,
}

impl FrequencyClass {
    pub const ALL: [FrequencyClass; 2] = [FrequencyClass::High, FrequencyClass::Low];

    pub fn tone(self) -> (f32, f32) {
        match self {
            FrequencyClass::High => (1800.0, 0.4),
            FrequencyClass::Low => (300.0, 0.4),
        }
    }
}

/// Pseudo-instruments used by the memory mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Drum,
    Trumpet,
    Guitar,
    Piano,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Drum,
        Instrument::Trumpet,
        Instrument::Guitar,
        Instrument::Piano,
    ];
}

/// Any clip in the sound cache.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Ui(UiCue),
    Direction(Direction),
    Frequency(FrequencyClass),
    Instrument(Instrument),
}

impl SoundId {
    /// Every sound, in cache build order.
    pub fn all() -> impl Iterator<Item = SoundId> {
        UiCue::ALL
            .into_iter()
            .map(SoundId::Ui)
            .chain(Direction::ALL.into_iter().map(SoundId::Direction))
            .chain(FrequencyClass::ALL.into_iter().map(SoundId::Frequency))
            .chain(Instrument::ALL.into_iter().map(SoundId::Instrument))
    }
}

impl From<UiCue> for SoundId {
    fn from(cue: UiCue) -> Self {
        SoundId::Ui(cue)
    }
}

impl From<Direction> for SoundId {
    fn from(direction: Direction) -> Self {
        SoundId::Direction(direction)
    }
}

impl From<FrequencyClass> for SoundId {
    fn from(class: FrequencyClass) -> Self {
        SoundId::Frequency(class)
    }
}

impl From<Instrument> for SoundId {
    fn from(instrument: Instrument) -> Self {
        SoundId::Instrument(instrument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_sounds_are_distinct() {
        let ids: Vec<SoundId> = SoundId::all().collect();
        let unique: HashSet<SoundId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 18);
        assert_eq!(unique.len(), ids.len());
    }
}
