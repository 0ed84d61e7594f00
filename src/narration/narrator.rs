use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::NarrationConfig;
use crate::narration::backend::SpeechBackend;
use crate::narration::voice::{self, Voice};

/// How often [`VoiceNarrator::poll_voices`] re-reads the backend's voices.
pub const VOICE_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// One spoken line with its prosody.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub language: String,
}

impl Utterance {
    /// `text` with the configured defaults.
    pub fn new(text: &str, config: &NarrationConfig) -> Self {
        Self {
            text: text.to_string(),
            rate: config.rate,
            pitch: config.pitch,
            volume: config.volume,
            language: config.language.clone(),
        }
    }
}

/// Speaks game narration through a [`SpeechBackend`].
///
/// At most one utterance is in flight: every `speak` cancels the previous
/// one first. The preferred voice is chosen by [`voice::select`] and chosen
/// again whenever the backend reports a different voice list. Speech
/// failures are logged and never reach the caller.
pub struct VoiceNarrator<B = Box<dyn SpeechBackend>> {
    backend: B,
    config: NarrationConfig,
    known_voices: Vec<Voice>,
    selected: Option<Voice>,
    since_refresh: Duration,
}

impl<B: SpeechBackend> VoiceNarrator<B> {
    pub fn new(backend: B, config: NarrationConfig) -> Self {
        let mut narrator = Self {
            backend,
            config,
            known_voices: Vec::new(),
            selected: None,
            since_refresh: Duration::ZERO,
        };
        narrator.refresh_voices();
        narrator
    }

    /// Re-read the backend's voices and reselect if the list changed.
    ///
    /// Returns true when the list changed.
    pub fn refresh_voices(&mut self) -> bool {
        self.since_refresh = Duration::ZERO;
        let voices = self.backend.voices();
        if voices == self.known_voices {
            return false;
        }

        self.known_voices = voices;
        self.selected = voice::select(&self.known_voices, &self.config.language_prefix).cloned();

        match &self.selected {
            Some(selected) => info!(
                voice = %selected.name,
                language = %selected.language,
                candidates = self.known_voices.len(),
                "narration voice selected"
            ),
            None => warn!(
                prefix = %self.config.language_prefix,
                "no matching narration voice, using platform default"
            ),
        }
        true
    }

    /// Count `dt` toward the next voice refresh and refresh once
    /// [`VOICE_REFRESH_INTERVAL`] has passed. Returns true when the list changed.
    pub fn poll_voices(&mut self, dt: Duration) -> bool {
        self.since_refresh += dt;
        if self.since_refresh < VOICE_REFRESH_INTERVAL {
            return false;
        }
        self.refresh_voices()
    }

    /// Speak `text`, interrupting whatever is being said.
    ///
    /// `rate` and `pitch` override the configured defaults for this line.
    pub fn speak(&mut self, text: &str, rate: Option<f32>, pitch: Option<f32>) {
        self.backend.cancel();

        // Some platforms only populate voices after the first request.
        if self.known_voices.is_empty() {
            self.refresh_voices();
        }

        let mut utterance = Utterance::new(text, &self.config);
        if let Some(rate) = rate {
            utterance.rate = rate;
        }
        if let Some(pitch) = pitch {
            utterance.pitch = pitch;
        }

        debug!(text, "speak");
        if let Err(err) = self.backend.speak(&utterance, self.selected.as_ref()) {
            warn!("narration failed: {err}");
        }
    }

    /// Stop the current utterance.
    pub fn cancel(&mut self) {
        self.backend.cancel();
    }

    pub fn is_speaking(&mut self) -> bool {
        self.backend.is_speaking()
    }

    pub fn selected_voice(&self) -> Option<&Voice> {
        self.selected.as_ref()
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::backend::CaptionSpeech;

    fn spanish_voices() -> Vec<Voice> {
        vec![
            Voice::new("Jorge", "es-ES").local(),
            Voice::new("Microsoft Helena", "es-ES").local(),
            Voice::new("Samantha", "en-US").local(),
        ]
    }

    #[test]
    fn speak_cancels_before_speaking() {
        let mut narrator =
            VoiceNarrator::new(CaptionSpeech::with_voices(spanish_voices()), NarrationConfig::default());
        narrator.speak("uno", None, None);
        narrator.speak("dos", None, None);

        let speech = narrator.backend();
        assert_eq!(speech.cancels(), 2);
        assert_eq!(speech.spoken().len(), 2);
        assert_eq!(speech.caption(), Some("dos"));
    }

    #[test]
    fn uses_selected_voice_and_defaults() {
        let mut narrator =
            VoiceNarrator::new(CaptionSpeech::with_voices(spanish_voices()), NarrationConfig::default());
        assert_eq!(narrator.selected_voice().unwrap().name, "Microsoft Helena");

        narrator.speak("hola", Some(1.2), None);
        let (utterance, voice) = &narrator.backend().spoken()[0];
        assert_eq!(voice.as_ref().unwrap().name, "Microsoft Helena");
        assert_eq!(utterance.rate, 1.2);
        assert_eq!(utterance.pitch, 1.0);
        assert_eq!(utterance.volume, 0.8);
        assert_eq!(utterance.language, "es-ES");
    }

    #[test]
    fn late_voices_trigger_reselection() {
        let mut narrator = VoiceNarrator::new(CaptionSpeech::new(), NarrationConfig::default());
        assert!(narrator.selected_voice().is_none());

        narrator.speak("antes", None, None);
        assert!(narrator.backend().spoken()[0].1.is_none());

        narrator.backend_mut().set_voices(spanish_voices());
        assert!(narrator.refresh_voices());
        assert!(!narrator.refresh_voices());
        assert_eq!(narrator.selected_voice().unwrap().name, "Microsoft Helena");
    }

    #[test]
    fn polling_notices_a_changed_voice_list() {
        let mut narrator =
            VoiceNarrator::new(CaptionSpeech::with_voices(spanish_voices()), NarrationConfig::default());
        assert_eq!(narrator.selected_voice().unwrap().name, "Microsoft Helena");

        // Helena is uninstalled while the game runs
        let mut voices = spanish_voices();
        voices.retain(|voice| voice.name != "Microsoft Helena");
        voices.push(Voice::new("Paulina", "es-MX").local());
        narrator.backend_mut().set_voices(voices);

        assert!(!narrator.poll_voices(Duration::from_secs(4)));
        assert_eq!(narrator.selected_voice().unwrap().name, "Microsoft Helena");
        assert!(narrator.poll_voices(Duration::from_secs(1)));
        assert_eq!(narrator.selected_voice().unwrap().name, "Paulina");

        assert!(!narrator.poll_voices(VOICE_REFRESH_INTERVAL));
    }

    #[test]
    fn backend_failure_is_swallowed() {
        let mut speech = CaptionSpeech::new();
        speech.set_failing(true);
        let mut narrator = VoiceNarrator::new(speech, NarrationConfig::default());
        narrator.speak("nada", None, None);
        assert!(narrator.backend().spoken().is_empty());
    }

    #[test]
    fn boxed_backend_is_the_default() {
        let backend: Box<dyn SpeechBackend> = Box::new(CaptionSpeech::new());
        let mut narrator: VoiceNarrator = VoiceNarrator::new(backend, NarrationConfig::default());
        narrator.speak("hola", None, None);
        narrator.cancel();
        assert!(!narrator.is_speaking());
    }
}
