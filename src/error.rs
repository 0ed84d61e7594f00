//! Error types shared by the audio and speech halves of the crate.

use thiserror::Error;

/// Failures of the synthesis and output path.
///
/// Only synthesis surfaces these to callers. Playback swallows them and
/// degrades to silence so a game keeps running without sound.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output device is not available")]
    DeviceUnavailable,

    #[error("no default output device available")]
    NoOutputDevice,

    #[error("failed to fetch default output config")]
    Config(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build output stream")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start output stream")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("invalid tone spec: {0}")]
    InvalidSpec(&'static str),
}

/// Failures reported by a speech backend.
///
/// The narrator logs these and carries on; they never reach game logic.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech program `{program}` could not be started")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("speech program `{program}` exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}
