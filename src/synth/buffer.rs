/// Immutable two-channel clip produced by the synthesizer.
///
/// Buffers are built once, wrapped in `Arc`, and shared between the sound
/// cache and the audio thread. Nothing mutates them after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub(crate) fn from_channels(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        debug_assert!(channels.windows(2).all(|w| w[0].len() == w[1].len()));
        Self {
            sample_rate,
            channels,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn duration_secs(&self) -> f32 {
        self.len() as f32 / self.sample_rate as f32
    }

    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// Left/right pair at `index`. Mono buffers repeat their only channel.
    #[inline]
    pub fn frame(&self, index: usize) -> (f32, f32) {
        let left = self.channels[0][index];
        let right = self.channels.get(1).map_or(left, |ch| ch[index]);
        (left, right)
    }
}
