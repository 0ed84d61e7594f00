use tracing::{debug, info, warn};

use crate::output::device::AudioDevice;
use crate::output::mixer::PlayCommand;
use crate::synth::{
    Direction, FrequencyClass, Instrument, SoundCache, SoundId, ToneSynthesizer, UiCue,
};

/// Gain and optional stereo position for one playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayParams {
    pub pan: Option<f32>,
    pub gain: f32,
}

impl PlayParams {
    pub const UI: PlayParams = PlayParams { pan: None, gain: 0.5 };
    pub const FREQUENCY: PlayParams = PlayParams { pan: None, gain: 0.6 };
    pub const INSTRUMENT: PlayParams = PlayParams { pan: None, gain: 0.7 };

    pub fn directional(direction: Direction) -> Self {
        Self {
            pan: Some(direction.pan()),
            gain: 0.7,
        }
    }

    /// Default parameters for a sound, by category.
    pub fn for_sound(id: SoundId) -> Self {
        match id {
            SoundId::Ui(_) => Self::UI,
            SoundId::Direction(direction) => Self::directional(direction),
            SoundId::Frequency(_) => Self::FREQUENCY,
            SoundId::Instrument(_) => Self::INSTRUMENT,
        }
    }
}

/// Plays cached clips on the session's output device.
///
/// Playback is fire-and-forget: no handle, no stop. Every failure (device
/// down, sound missing, queue full) degrades to silence so game logic never
/// waits on audio. Synthesis, by contrast, fails loudly; the player absorbs
/// that once at construction by starting with an empty cache.
pub struct SpatialAudioPlayer {
    device: AudioDevice,
    cache: SoundCache,
}

impl SpatialAudioPlayer {
    /// Take ownership of the device and synthesize every sound for it.
    pub fn new(device: AudioDevice) -> Self {
        let synth = device
            .sample_rate()
            .map_or_else(ToneSynthesizer::unavailable, ToneSynthesizer::new);

        let cache = match SoundCache::build(&synth) {
            Ok(cache) => {
                info!(sounds = cache.len(), "sound cache ready");
                cache
            }
            Err(err) => {
                warn!("sound cache left empty: {err}");
                SoundCache::empty()
            }
        };

        Self { device, cache }
    }

    pub fn device(&self) -> &AudioDevice {
        &self.device
    }

    pub fn cache(&self) -> &SoundCache {
        &self.cache
    }

    /// Schedule immediate playback of `id`.
    pub fn play(&mut self, id: SoundId, params: PlayParams) {
        let Some(buffer) = self.cache.get(id) else {
            debug!(?id, "sound unavailable, skipping");
            return;
        };

        let command = PlayCommand {
            buffer: buffer.clone(),
            gain: params.gain.clamp(0.0, 1.0),
            pan: params.pan.map(|pan| pan.clamp(-1.0, 1.0)),
        };

        if !self.device.submit(command) {
            debug!(?id, "device not accepting sounds");
        }
    }

    /// Play with the category's default gain and pan.
    pub fn play_cue(&mut self, id: SoundId) {
        self.play(id, PlayParams::for_sound(id));
    }

    pub fn play_sound(&mut self, cue: UiCue) {
        self.play(SoundId::Ui(cue), PlayParams::UI);
    }

    pub fn play_directional(&mut self, direction: Direction) {
        self.play(SoundId::Direction(direction), PlayParams::directional(direction));
    }

    pub fn play_frequency(&mut self, class: FrequencyClass) {
        self.play(SoundId::Frequency(class), PlayParams::FREQUENCY);
    }

    pub fn play_instrument(&mut self, instrument: Instrument) {
        self.play(SoundId::Instrument(instrument), PlayParams::INSTRUMENT);
    }

    /// Release the device. Consumes the player.
    pub fn close(mut self) {
        self.device.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_plays_are_panned() {
        let mut player = SpatialAudioPlayer::new(AudioDevice::offline(8_000));
        player.play_directional(Direction::Left);
        player.play_directional(Direction::Right);
        player.play_sound(UiCue::Correct);

        let history = player.device().history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].pan, Some(-1.0));
        assert_eq!(history[1].pan, Some(1.0));
        assert_eq!(history[2].pan, None);
        assert_eq!(history[2].gain, 0.5);
    }

    #[test]
    fn category_gains_follow_defaults() {
        let mut player = SpatialAudioPlayer::new(AudioDevice::offline(8_000));
        player.play_frequency(FrequencyClass::High);
        player.play_instrument(Instrument::Piano);
        player.play_cue(SoundId::Direction(Direction::Center));

        let gains: Vec<f32> = player.device().history().iter().map(|c| c.gain).collect();
        assert_eq!(gains, vec![0.6, 0.7, 0.7]);
    }

    #[test]
    fn unavailable_device_is_silent_noop() {
        let mut player = SpatialAudioPlayer::new(AudioDevice::unavailable());
        assert!(player.cache().is_empty());

        player.play_sound(UiCue::Start);
        player.play_directional(Direction::Center);
        assert!(player.device().history().is_empty());
    }

    #[test]
    fn closed_device_drops_plays() {
        let mut player = SpatialAudioPlayer::new(AudioDevice::offline(8_000));
        player.device.close();
        player.play_sound(UiCue::Start);
        assert!(player.device().history().is_empty());
    }
}
