//! Description of a synthesized clip.

use crate::dsp::{envelope::DecayEnvelope, oscillator::sine};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sine component of an additive tone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    pub frequency: f32,
    pub amplitude: f32,
}

/// A brief sine burst at the very start of a clip (a pick or hammer hit).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transient {
    pub frequency: f32,
    pub amplitude: f32,
    /// Seconds the burst lasts.
    pub length: f32,
}

/// Everything needed to render a clip: partials, length, envelope and the
/// optional noise and transient components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSpec {
    pub partials: Vec<Partial>,
    /// Clip length in seconds.
    pub duration: f32,
    pub envelope: DecayEnvelope,
    /// Peak amplitude of the white-noise component (0 disables it).
    pub noise: f32,
    pub noise_seed: u64,
    pub transient: Option<Transient>,
}

impl ToneSpec {
    pub fn new(duration: f32, envelope: DecayEnvelope) -> Self {
        Self {
            partials: Vec::new(),
            duration,
            envelope,
            noise: 0.0,
            noise_seed: 0,
            transient: None,
        }
    }

    pub fn partial(mut self, frequency: f32, amplitude: f32) -> Self {
        self.partials.push(Partial {
            frequency,
            amplitude,
        });
        self
    }

    pub fn noise(mut self, amplitude: f32, seed: u64) -> Self {
        self.noise = amplitude;
        self.noise_seed = seed;
        self
    }

    pub fn transient(mut self, frequency: f32, amplitude: f32, length: f32) -> Self {
        self.transient = Some(Transient {
            frequency,
            amplitude,
            length,
        });
        self
    }

    /// Sample value at `t` seconds given a noise draw in [-1, 1).
    #[inline]
    pub fn sample_at(&self, t: f32, noise: f32) -> f32 {
        let mut body: f32 = self
            .partials
            .iter()
            .map(|p| sine(p.frequency, t) * p.amplitude)
            .sum();

        if let Some(burst) = self.transient {
            if t < burst.length {
                body += sine(burst.frequency, t) * burst.amplitude;
            }
        }

        body += noise * self.noise;
        body * self.envelope.level_at(t, self.duration)
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err("duration must be positive");
        }
        if self.partials.is_empty() && self.noise == 0.0 {
            return Err("spec has no partials and no noise");
        }
        Ok(())
    }
}
