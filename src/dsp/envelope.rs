use crate::MIN_TIME;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Exponential Decay Envelope
==========================

Every sound in the game is a short, self-terminating clip: a tone is struck
and rings out. There is no gate, no sustain, no note-off. That makes the
envelope a pure function of time instead of a state machine.

Vocabulary
----------

  decay rate  `k` in exp(-k·t). Larger k means a shorter ring. A rate of 3
              leaves ~74% after 100 ms; a rate of 12 leaves ~30%.

  attack      An optional rising curve multiplied in during the first few
              milliseconds, 1 - exp(-a·t). It softens the onset of tones
              whose first sample would otherwise jump from silence.

  taper       A linear fade over the last few milliseconds of the clip.
              exp(-k·t) never reaches zero on its own, so without the
              taper a slowly decaying clip would stop mid-swing and click.


The Shape
---------

  Level
    1.0 ┐╲
        │ ╲
        │  ╲__
        │     ‾‾──___
        │            ‾‾‾──────╲   ← taper
    0.0 └──────────────────────╲──→ Time
        0                   duration

    level(t) = attack(t) · exp(-k·t) · taper(t)

    attack(t) = 1 - exp(-a·t)   while t < attack_until, else 1
    taper(t)  = clamp((duration - t) / taper_len, 0, 1)

At t = duration the taper term is exactly zero, so every clip ends in
silence regardless of its decay rate.
*/

/// Default fade applied at the end of every clip (seconds).
pub const DEFAULT_TAPER: f32 = 0.005;

/// Attack curve `1 - exp(-rate·t)`, active until `until` seconds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attack {
    pub rate: f32,
    pub until: f32,
}

/// Amplitude envelope of a one-shot clip.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEnvelope {
    decay_rate: f32,
    attack: Option<Attack>,
    taper: f32,
}

impl DecayEnvelope {
    /// Pure exponential decay with the default end taper.
    pub fn exponential(decay_rate: f32) -> Self {
        Self {
            decay_rate: decay_rate.max(0.0),
            attack: None,
            taper: DEFAULT_TAPER,
        }
    }

    /// Gate the first `until` seconds with `1 - exp(-rate·t)`.
    pub fn with_attack(mut self, rate: f32, until: f32) -> Self {
        self.attack = Some(Attack {
            rate: rate.max(0.0),
            until: until.max(MIN_TIME),
        });
        self
    }

    /// Length of the closing linear fade.
    pub fn with_taper(mut self, seconds: f32) -> Self {
        self.taper = seconds.max(MIN_TIME);
        self
    }

    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    pub fn attack(&self) -> Option<Attack> {
        self.attack
    }

    /// Envelope level at `t` seconds into a clip lasting `duration` seconds.
    #[inline]
    pub fn level_at(&self, t: f32, duration: f32) -> f32 {
        if t < 0.0 || t >= duration {
            return 0.0;
        }

        let onset = match self.attack {
            Some(Attack { rate, until }) if t < until => 1.0 - (-t * rate).exp(),
            _ => 1.0,
        };
        let decay = (-t * self.decay_rate).exp();
        let taper = ((duration - t) / self.taper).clamp(0.0, 1.0);

        onset * decay * taper
    }

    /// Fill `buffer` with envelope levels, one per sample.
    pub fn render(&self, buffer: &mut [f32], sample_rate: f32, duration: f32) {
        for (i, level) in buffer.iter_mut().enumerate() {
            *level = self.level_at(i as f32 / sample_rate, duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn decays_from_full_level() {
        let env = DecayEnvelope::exponential(3.0);
        assert!((env.level_at(0.0, 1.0) - 1.0).abs() < 1e-6);

        let expected = (-0.1f32 * 3.0).exp();
        assert!((env.level_at(0.1, 1.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn reaches_silence_at_duration() {
        let env = DecayEnvelope::exponential(0.5);
        assert_eq!(env.level_at(1.0, 1.0), 0.0);

        let near_end = env.level_at(1.0 - 1.0 / SAMPLE_RATE, 1.0);
        assert!(near_end < 0.25, "taper should pull the last sample down, got {near_end}");
    }

    #[test]
    fn attack_starts_silent_and_releases_after_window() {
        let env = DecayEnvelope::exponential(0.5).with_attack(50.0, 0.1);
        assert_eq!(env.level_at(0.0, 1.0), 0.0);

        // Past the attack window only the decay term remains.
        let t = 0.2;
        let expected = (-t * 0.5f32).exp();
        assert!((env.level_at(t, 1.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn render_matches_level_at() {
        let env = DecayEnvelope::exponential(12.0);
        let mut buffer = vec![0.0f32; 400];
        env.render(&mut buffer, SAMPLE_RATE, 0.4);

        for (i, &level) in buffer.iter().enumerate() {
            let t = i as f32 / SAMPLE_RATE;
            assert!((level - env.level_at(t, 0.4)).abs() < 1e-6);
        }
    }
}
