//! Spoken guidance: voice selection, utterance control and speech engines.

pub mod backend;
pub mod narrator;
pub mod voice;

pub use backend::{CaptionSpeech, CommandSpeech, SpeechBackend};
pub use narrator::{Utterance, VoiceNarrator, VOICE_REFRESH_INTERVAL};
pub use voice::Voice;
