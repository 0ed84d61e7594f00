//! Low-level DSP primitives used by the synthesizer and the output mixer.
//!
//! These stay focused on the signal math. Presets, caching and playback
//! live in `synth` and `output`.

/// One-shot exponential envelope with optional attack and end taper.
pub mod envelope;
/// Summing and clipping helpers.
pub mod mix;
/// Sine partials and seeded noise.
pub mod oscillator;
/// Equal-power stereo panner.
pub mod pan;

pub use envelope::DecayEnvelope;
pub use pan::StereoPanner;
