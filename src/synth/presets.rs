//! Pre-built tone specs for every sound in the games.
//!
//! Each preset is a fixed additive recipe: a few sine partials, an
//! exponential decay, and for some instruments a noise or transient layer.
//! They are deliberately cartoonish. The player only needs four timbres that
//! are easy to tell apart by ear, not realistic instruments.
//!
//! # Example
//!
//! ```ignore
//! use katamaran::synth::{presets, Instrument, SoundId};
//!
//! let beep = presets::tone(440.0, 0.2);
//! let drum = presets::instrument(Instrument::Drum);
//! let any = presets::spec_for(SoundId::Instrument(Instrument::Piano));
//! ```

use crate::dsp::envelope::DecayEnvelope;

use super::sound::{Instrument, SoundId};
use super::spec::ToneSpec;

const TONE_AMPLITUDE: f32 = 0.3;
const TONE_DECAY: f32 = 3.0;
const DRUM_NOISE_SEED: u64 = 0x6b61_7461;

/// Single-partial UI tone.
pub fn tone(frequency: f32, duration: f32) -> ToneSpec {
    ToneSpec::new(duration, DecayEnvelope::exponential(TONE_DECAY)).partial(frequency, TONE_AMPLITUDE)
}

/// Spec for any cached sound.
pub fn spec_for(id: SoundId) -> ToneSpec {
    let (frequency, duration) = match id {
        SoundId::Ui(cue) => cue.tone(),
        SoundId::Direction(direction) => direction.tone(),
        SoundId::Frequency(class) => class.tone(),
        SoundId::Instrument(instrument) => return self::instrument(instrument),
    };
    tone(frequency, duration)
}

pub fn instrument(instrument: Instrument) -> ToneSpec {
    match instrument {
        Instrument::Drum => drum(),
        Instrument::Trumpet => trumpet(),
        Instrument::Guitar => guitar(),
        Instrument::Piano => piano(),
    }
}

/// Noisy low percussive hit.
///
/// # How It Works
///
/// 1. 60 Hz sine gives the body, 200 Hz adds the snap
/// 2. White noise at almost half scale gives the skin rattle
/// 3. Fast decay (k = 12) so it's gone well before the next cue
pub fn drum() -> ToneSpec {
    ToneSpec::new(0.4, DecayEnvelope::exponential(12.0))
        .partial(60.0, 0.9)
        .partial(200.0, 0.3)
        .noise(0.4, DRUM_NOISE_SEED)
}

/// Bright brass-like tone: C5 with two overtones (C6, G6).
pub fn trumpet() -> ToneSpec {
    ToneSpec::new(0.5, DecayEnvelope::exponential(1.5))
        .partial(523.0, 0.7)
        .partial(1046.0, 0.4)
        .partial(1569.0, 0.2)
}

/// Plucked string: G4 with overtones and a 10 ms pick transient at 2 kHz.
pub fn guitar() -> ToneSpec {
    ToneSpec::new(0.8, DecayEnvelope::exponential(0.8))
        .partial(392.0, 0.6)
        .partial(784.0, 0.3)
        .partial(1176.0, 0.15)
        .transient(2000.0, 0.3, 0.01)
}

/// Rich hammered tone: C4 with three overtones and a soft attack.
///
/// The attack curve `1 - exp(-50t)` during the first 100 ms rounds off
/// the hammer strike, then the slow decay (k = 0.5) lets it ring.
pub fn piano() -> ToneSpec {
    ToneSpec::new(1.0, DecayEnvelope::exponential(0.5).with_attack(50.0, 0.1))
        .partial(261.63, 0.8)
        .partial(523.25, 0.4)
        .partial(784.88, 0.2)
        .partial(1046.5, 0.1)
}
