//! Getting synthesized clips to the speakers.
//!
//! The device owns the output stream, the mixer sums overlapping clips on
//! the audio thread, and the player is the game-facing front end.

/// Output device (cpal stream, offline recorder, or unavailable).
pub mod device;
/// Allocation-free voice summing for the audio callback.
pub mod mixer;
/// Fire-and-forget playback of cached sounds.
pub mod player;

pub use device::AudioDevice;
pub use mixer::{PlayCommand, VoiceMixer};
pub use player::{PlayParams, SpatialAudioPlayer};
