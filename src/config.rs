//! Tunable settings for game sessions and narration.
//!
//! Both structs follow the builder style used by the binary: start from
//! `Default` and chain `with_*` calls for the values you want to change.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings shared by every game mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seconds on the clock when a game starts.
    pub time_limit: u32,
    /// Delay between the start key and the first stimulus, and between
    /// resume and the first stimulus after a pause.
    pub countdown: Duration,
    /// Overrides the mode's built-in starting high score.
    pub high_score: Option<u32>,
    /// Fixes the stimulus draw order. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: 60,
            countdown: Duration::from_secs(3),
            high_score: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = seconds;
        self
    }

    pub fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown = countdown;
        self
    }

    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = Some(high_score);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Speech defaults applied to every utterance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationConfig {
    /// Voices whose language tag starts with this prefix are candidates.
    pub language_prefix: String,
    /// Language tag attached to every utterance.
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            language_prefix: "es".to_string(),
            language: "es-ES".to_string(),
            rate: 0.9,
            pitch: 1.0,
            volume: 0.8,
        }
    }
}

impl NarrationConfig {
    pub fn with_language(mut self, prefix: &str, tag: &str) -> Self {
        self.language_prefix = prefix.to_string();
        self.language = tag.to_string();
        self
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }
}
