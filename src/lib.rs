pub mod config;
pub mod dsp; // Envelope, oscillator, pan and mix math
pub mod error;
pub mod game; // Mode state machines and narration script table
pub mod narration; // Voice selection and utterance control
pub mod output; // Output device, voice mixer, spatial player
pub mod synth; // Tone presets and buffer synthesis

pub use config::{GameConfig, NarrationConfig};
pub use error::{AudioError, SpeechError};

/// Voices the output mixer can hold at once before stealing the oldest.
pub const MAX_ACTIVE_VOICES: usize = 32;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
