//! Summing and level primitives used by the output mixer.

/*
Summing Voices
==============

Overlapping clips are expected: a "correct" chime lands on top of the
stimulus that is still ringing, and memory mode fires one instrument every
800 ms while the previous one is still decaying. The mixer therefore SUMS
voices rather than crossfading them.

  summing     out = Σ voice_i · gain_i
              Two full-scale voices can reach 2.0, well past the
              [-1.0, +1.0] range a device accepts.

  hard clip   clamp(out, -1, 1). Cheap and predictable. The preset gains
              (0.5 to 0.7) and envelopes keep typical overlaps below full
              scale, so clipping only catches the rare pile-up.
*/

/// Clamp every sample to [-1.0, +1.0].
#[inline]
pub fn hard_clip_in_place(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = sample.clamp(-1.0, 1.0);
    }
}

/// Peak absolute value of a buffer.
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_clip_bounds_pileups() {
        let mut buffer = vec![1.7, -2.0, 0.4];
        hard_clip_in_place(&mut buffer);
        assert_eq!(buffer, vec![1.0, -1.0, 0.4]);
        assert_eq!(peak(&buffer), 1.0);
    }
}
