use katamaran::narration::voice::{self, Voice};
use katamaran::narration::{CaptionSpeech, VoiceNarrator};
use katamaran::output::{AudioDevice, SpatialAudioPlayer};
use katamaran::synth::{presets, SoundId, ToneSynthesizer};
use katamaran::{AudioError, NarrationConfig};

#[test]
fn every_sound_has_expected_length_and_fades_out() {
    let synth = ToneSynthesizer::new(44_100);

    for id in SoundId::all() {
        let spec = presets::spec_for(id);
        let buffer = synth.render(id).expect("device is available");

        let expected = (spec.duration as f64 * 44_100.0).round() as usize;
        assert_eq!(buffer.len(), expected, "{id:?} length");
        assert_eq!(buffer.num_channels(), 2);

        for channel in 0..buffer.num_channels() {
            let samples = buffer.channel(channel);
            let last = samples.last().copied().unwrap_or(0.0);
            assert!(last.abs() < 1e-2, "{id:?} should end near silence, got {last}");
            assert!(samples.iter().all(|s| s.abs() <= 1.0), "{id:?} clips");
        }
    }
}

#[test]
fn synthesis_without_device_fails_loudly() {
    let synth = ToneSynthesizer::unavailable();
    let result = synth.synthesize(&presets::tone(440.0, 0.2));
    assert!(matches!(result, Err(AudioError::DeviceUnavailable)));
}

#[test]
fn player_without_device_stays_silent() {
    let mut player = SpatialAudioPlayer::new(AudioDevice::unavailable());
    assert!(player.cache().is_empty());
    for id in SoundId::all() {
        player.play_cue(id);
    }
    assert!(player.device().history().is_empty());
}

#[test]
fn female_quality_voice_beats_male_voice() {
    let voices = vec![
        Voice::new("Jorge", "es-ES").local(),
        Voice::new("Google español Mónica", "es-ES"),
        Voice::new("Samantha", "en-US"),
    ];

    let chosen = voice::select(&voices, "es").map(|v| v.name.as_str());
    assert_eq!(chosen, Some("Google español Mónica"));
    assert!(voice::score(&voices[1]) > voice::score(&voices[0]));
}

#[test]
fn narrator_reselects_when_voices_appear_late() {
    let config = NarrationConfig::default();
    let mut narrator = VoiceNarrator::new(CaptionSpeech::new(), config);
    assert!(narrator.selected_voice().is_none());

    narrator
        .backend_mut()
        .set_voices(vec![Voice::new("Paulina", "es-MX")]);
    narrator.speak("¡Bienvenido!", None, None);

    assert_eq!(
        narrator.selected_voice().map(|v| v.name.as_str()),
        Some("Paulina")
    );
    let (utterance, used) = &narrator.backend().spoken()[0];
    assert_eq!(utterance.text, "¡Bienvenido!");
    assert_eq!(used.as_ref().map(|v| v.name.as_str()), Some("Paulina"));
    assert!(narrator.is_speaking());

    narrator.cancel();
    assert!(!narrator.is_speaking());
}
