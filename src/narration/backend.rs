//! Platform speech engines behind a common trait.

use std::process::{Child, Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::SpeechError;
use crate::narration::narrator::Utterance;
use crate::narration::voice::Voice;

/// A text-to-speech engine.
///
/// Implementations speak one utterance at a time. `speak` may return
/// before the audio finishes; `cancel` must stop whatever is playing.
pub trait SpeechBackend: Send {
    /// Voices currently known to the engine. May be empty at first and
    /// fill in later on platforms that load voices lazily.
    fn voices(&mut self) -> Vec<Voice>;

    /// Start speaking. `voice` of `None` means the engine's default.
    fn speak(&mut self, utterance: &Utterance, voice: Option<&Voice>) -> Result<(), SpeechError>;

    /// Stop the in-flight utterance, if any.
    fn cancel(&mut self);

    fn is_speaking(&mut self) -> bool {
        false
    }
}

impl SpeechBackend for Box<dyn SpeechBackend> {
    fn voices(&mut self) -> Vec<Voice> {
        (**self).voices()
    }

    fn speak(&mut self, utterance: &Utterance, voice: Option<&Voice>) -> Result<(), SpeechError> {
        (**self).speak(utterance, voice)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }

    fn is_speaking(&mut self) -> bool {
        (**self).is_speaking()
    }
}

/// Words per minute `espeak-ng` uses at rate 1.0.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Drives an `espeak-ng` compatible command-line synthesizer.
///
/// Each utterance is a child process; cancelling kills it.
pub struct CommandSpeech {
    program: String,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            child: None,
        }
    }

    /// `espeak-ng` if it can be started on this machine.
    pub fn detect() -> Option<Self> {
        let program = "espeak-ng";
        let probe = Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => Some(Self::new(program)),
            Ok(status) => {
                debug!(program, %status, "speech probe failed");
                None
            }
            Err(err) => {
                debug!(program, "speech program not found: {err}");
                None
            }
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let output = Command::new(&self.program)
            .arg("--voices")
            .stderr(Stdio::null())
            .output()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SpeechError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File          Other Languages
///  5  es              --/M      Spanish_(Spain)    roa/es
/// ```
pub fn parse_voice_list(table: &str) -> Vec<Voice> {
    table
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let _priority = columns.next()?;
            let language = columns.next()?;
            let _age_gender = columns.next()?;
            let name = columns.next()?;
            Some(Voice::new(&name.replace('_', " "), language).local())
        })
        .collect()
}

impl SpeechBackend for CommandSpeech {
    fn voices(&mut self) -> Vec<Voice> {
        match self.list_voices() {
            Ok(voices) => voices,
            Err(err) => {
                warn!("could not list voices: {err}");
                Vec::new()
            }
        }
    }

    fn speak(&mut self, utterance: &Utterance, voice: Option<&Voice>) -> Result<(), SpeechError> {
        self.cancel();

        // espeak-ng names voices by language; the display name is cosmetic.
        let tag = voice.map_or(utterance.language.as_str(), |v| v.language.as_str());
        let words_per_minute = (utterance.rate * BASE_WORDS_PER_MINUTE).round() as u32;
        let pitch = (utterance.pitch * 50.0).clamp(0.0, 99.0).round() as u32;
        let amplitude = (utterance.volume * 100.0).clamp(0.0, 200.0).round() as u32;

        let child = Command::new(&self.program)
            .arg("-v")
            .arg(tag.to_ascii_lowercase())
            .arg("-s")
            .arg(words_per_minute.to_string())
            .arg("-p")
            .arg(pitch.to_string())
            .arg("-a")
            .arg(amplitude.to_string())
            .arg(&utterance.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Speaks into the log and keeps the transcript.
///
/// Used when no speech engine is installed, so the terminal caption still
/// shows what would have been said, and as a recording double in tests.
#[derive(Debug, Default)]
pub struct CaptionSpeech {
    voices: Vec<Voice>,
    spoken: Vec<(Utterance, Option<Voice>)>,
    cancels: usize,
    speaking: bool,
    fail: bool,
}

impl CaptionSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            ..Self::default()
        }
    }

    /// Replace the voice list, as a platform does when voices finish loading.
    pub fn set_voices(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
    }

    /// Make every following `speak` fail.
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Every utterance spoken so far, with the voice it was given.
    pub fn spoken(&self) -> &[(Utterance, Option<Voice>)] {
        &self.spoken
    }

    /// Text of the most recent utterance.
    pub fn caption(&self) -> Option<&str> {
        self.spoken.last().map(|(utterance, _)| utterance.text.as_str())
    }

    pub fn cancels(&self) -> usize {
        self.cancels
    }
}

impl SpeechBackend for CaptionSpeech {
    fn voices(&mut self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&mut self, utterance: &Utterance, voice: Option<&Voice>) -> Result<(), SpeechError> {
        if self.fail {
            return Err(SpeechError::Spawn {
                program: "caption".to_string(),
                source: std::io::Error::other("speech disabled"),
            });
        }

        info!(target: "narration", voice = voice.map(|v| v.name.as_str()), "{}", utterance.text);
        self.spoken.push((utterance.clone(), voice.cloned()));
        self.speaking = true;
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancels += 1;
        self.speaking = false;
    }

    fn is_speaking(&mut self) -> bool {
        self.speaking
    }
}
