use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AudioError;

use super::buffer::AudioBuffer;
use super::sound::SoundId;
use super::synthesizer::ToneSynthesizer;

/// Every game sound, synthesized once at startup.
///
/// The cache is read-only after `build` and lives for the whole session.
#[derive(Debug, Default)]
pub struct SoundCache {
    buffers: HashMap<SoundId, Arc<AudioBuffer>>,
}

impl SoundCache {
    /// Cache with no sounds. Lookups all miss.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render every [`SoundId`]. Fails on the first synthesis error.
    pub fn build(synth: &ToneSynthesizer) -> Result<Self, AudioError> {
        let buffers = SoundId::all()
            .map(|id| synth.render(id).map(|buffer| (id, Arc::new(buffer))))
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self { buffers })
    }

    pub fn get(&self, id: SoundId) -> Option<&Arc<AudioBuffer>> {
        self.buffers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::sound::{Direction, UiCue};

    #[test]
    fn builds_every_sound() {
        let cache = SoundCache::build(&ToneSynthesizer::new(8_000)).unwrap();
        assert_eq!(cache.len(), SoundId::all().count());
        assert!(cache.get(SoundId::Direction(Direction::Left)).is_some());
    }

    #[test]
    fn unavailable_device_yields_error() {
        let result = SoundCache::build(&ToneSynthesizer::unavailable());
        assert!(matches!(result, Err(AudioError::DeviceUnavailable)));
        assert!(SoundCache::empty().get(SoundId::Ui(UiCue::Correct)).is_none());
    }
}
