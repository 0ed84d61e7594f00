//! Equal-power stereo panning for two-channel sources.

use std::f32::consts::FRAC_PI_2;

/*
Stereo Panning
==============

Directional cues are the heart of the rhythm mode: the player hears a tone
in the left ear, the right ear, or both, and answers with the matching key.

Vocabulary
----------

  pan         Position in the stereo field, -1.0 (hard left) to +1.0
              (hard right). 0.0 leaves the source where it is.

  equal power Gains follow cos/sin of a quarter circle so the total power
              (L² + R²) stays constant as the source moves. A linear law
              would dip in loudness at the centre.


Stereo-input Law
----------------

Our buffers are already two-channel, so panning does not place a mono
source; it folds one side into the other.

  pan ≤ 0, x = pan + 1:
      out_L = in_L + in_R · cos(x·π/2)
      out_R =        in_R · sin(x·π/2)

  pan > 0, x = pan:
      out_L =        in_L · cos(x·π/2)
      out_R = in_R + in_L · sin(x·π/2)

  pan = -1  →  everything in the left ear, right ear silent
  pan =  0  →  input unchanged
  pan = +1  →  everything in the right ear, left ear silent
*/

/// Precomputed gains for one pan position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoPanner {
    pan: f32,
    gain_a: f32,
    gain_b: f32,
}

impl StereoPanner {
    pub fn new(pan: f32) -> Self {
        let pan = if pan.is_finite() { pan.clamp(-1.0, 1.0) } else { 0.0 };
        let x = if pan <= 0.0 { pan + 1.0 } else { pan };
        let angle = x * FRAC_PI_2;

        Self {
            pan,
            gain_a: angle.cos(),
            gain_b: angle.sin(),
        }
    }

    pub fn pan(&self) -> f32 {
        self.pan
    }

    /// Pan a single stereo frame.
    #[inline]
    pub fn process(&self, left: f32, right: f32) -> (f32, f32) {
        if self.pan <= 0.0 {
            (left + right * self.gain_a, right * self.gain_b)
        } else {
            (left * self.gain_a, right + left * self.gain_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_left_silences_right() {
        let panner = StereoPanner::new(-1.0);
        let (l, r) = panner.process(0.5, 0.5);
        assert!((l - 1.0).abs() < 1e-6);
        assert!(r.abs() < 1e-6);
    }

    #[test]
    fn hard_right_silences_left() {
        let panner = StereoPanner::new(1.0);
        let (l, r) = panner.process(0.5, 0.5);
        assert!(l.abs() < 1e-6);
        assert!((r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn centre_leaves_input_untouched() {
        let panner = StereoPanner::new(0.0);
        let (l, r) = panner.process(0.3, -0.2);
        assert!((l - 0.3).abs() < 1e-6);
        assert!((r + 0.2).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_pan_is_clamped() {
        assert_eq!(StereoPanner::new(4.0).pan(), 1.0);
        assert_eq!(StereoPanner::new(f32::NAN).pan(), 0.0);
    }
}
