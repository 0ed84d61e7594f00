use tracing::debug;

use crate::dsp::oscillator::NoiseSource;
use crate::error::AudioError;

use super::buffer::AudioBuffer;
use super::presets;
use super::sound::SoundId;
use super::spec::ToneSpec;

/// Channels in every synthesized buffer.
pub const CHANNELS: usize = 2;

/// Renders tone specs into buffers at the output device's sample rate.
///
/// A synthesizer built for a device that failed to open has no sample rate
/// and rejects every request with [`AudioError::DeviceUnavailable`]. Callers
/// must handle that instead of assuming synthesis always works.
#[derive(Debug, Clone, Copy)]
pub struct ToneSynthesizer {
    sample_rate: Option<u32>,
}

impl ToneSynthesizer {
    /// Synthesizer for a device running at `sample_rate` Hz.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate: Some(sample_rate).filter(|&rate| rate > 0),
        }
    }

    /// Synthesizer with no device behind it.
    pub fn unavailable() -> Self {
        Self { sample_rate: None }
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    /// Render a spec. Pure: the same spec and rate give the same buffer.
    pub fn synthesize(&self, spec: &ToneSpec) -> Result<AudioBuffer, AudioError> {
        let sample_rate = self.sample_rate.ok_or(AudioError::DeviceUnavailable)?;
        spec.validate().map_err(AudioError::InvalidSpec)?;

        let rate = sample_rate as f32;
        let num_samples = (f64::from(spec.duration) * f64::from(sample_rate)).round() as usize;

        // One noise stream per channel keeps the left and right ears
        // decorrelated, which widens percussive hits.
        let channels = (0..CHANNELS)
            .map(|channel| {
                let mut noise = NoiseSource::new(spec.noise_seed.wrapping_add(channel as u64));
                (0..num_samples)
                    .map(|i| {
                        let t = i as f32 / rate;
                        let n = if spec.noise != 0.0 { noise.next_sample() } else { 0.0 };
                        spec.sample_at(t, n)
                    })
                    .collect()
            })
            .collect();

        Ok(AudioBuffer::from_channels(sample_rate, channels))
    }

    /// Render the preset for a cached sound.
    pub fn render(&self, id: SoundId) -> Result<AudioBuffer, AudioError> {
        let buffer = self.synthesize(&presets::spec_for(id))?;
        debug!(?id, samples = buffer.len(), "synthesized sound");
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::envelope::DecayEnvelope;
    use crate::synth::sound::Instrument;

    const SAMPLE_RATE: u32 = 48_000;

    #[test]
    fn sample_count_matches_duration() {
        let synth = ToneSynthesizer::new(SAMPLE_RATE);
        let buffer = synth.synthesize(&presets::tone(440.0, 0.25)).unwrap();

        assert_eq!(buffer.num_channels(), CHANNELS);
        assert_eq!(buffer.len(), 12_000);
        assert_eq!(buffer.sample_rate(), SAMPLE_RATE);
    }

    #[test]
    fn fails_fast_without_device() {
        let synth = ToneSynthesizer::unavailable();
        let result = synth.synthesize(&presets::tone(440.0, 0.25));
        assert!(matches!(result, Err(AudioError::DeviceUnavailable)));

        assert!(matches!(
            ToneSynthesizer::new(0).render(SoundId::Instrument(Instrument::Drum)),
            Err(AudioError::DeviceUnavailable)
        ));
    }

    #[test]
    fn rejects_empty_spec() {
        let synth = ToneSynthesizer::new(SAMPLE_RATE);
        let empty = ToneSpec::new(0.1, DecayEnvelope::exponential(1.0));
        assert!(matches!(synth.synthesize(&empty), Err(AudioError::InvalidSpec(_))));

        let negative = presets::tone(440.0, -1.0);
        assert!(matches!(synth.synthesize(&negative), Err(AudioError::InvalidSpec(_))));
    }

    #[test]
    fn noise_is_deterministic() {
        let synth = ToneSynthesizer::new(SAMPLE_RATE);
        let a = synth.render(SoundId::Instrument(Instrument::Drum)).unwrap();
        let b = synth.render(SoundId::Instrument(Instrument::Drum)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.channel(0), a.channel(1), "channels should carry different noise");
    }

    #[test]
    fn guitar_transient_only_colours_the_onset() {
        let synth = ToneSynthesizer::new(SAMPLE_RATE);
        let with = synth.synthesize(&presets::guitar()).unwrap();

        let mut plain_spec = presets::guitar();
        plain_spec.transient = None;
        let plain = synth.synthesize(&plain_spec).unwrap();

        // Quarter period of the 2 kHz burst, where it peaks.
        let onset = 6;
        let later = (0.05 * SAMPLE_RATE as f32) as usize;
        assert_ne!(with.channel(0)[onset], plain.channel(0)[onset]);
        assert_eq!(with.channel(0)[later], plain.channel(0)[later]);
    }
}
