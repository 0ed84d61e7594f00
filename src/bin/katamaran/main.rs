//! katamaran - audio-only games in the terminal
//!
//! Run with: cargo run
//!
//! Environment:
//!   KATAMARAN_SEED=<u64>            fixed stimulus order
//!   KATAMARAN_SPEECH=auto|captions  speech engine (default: espeak-ng if found)
//!   KATAMARAN_LOG=<path>            write logs there (filter via RUST_LOG)

mod app;
mod keymap;
mod ui;

use std::fs::File;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use katamaran::narration::{CaptionSpeech, CommandSpeech, SpeechBackend, VoiceNarrator};
use katamaran::output::{AudioDevice, SpatialAudioPlayer};
use katamaran::{GameConfig, NarrationConfig};

use app::App;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let config = game_config()?;
    let narrator = VoiceNarrator::new(speech_backend()?, NarrationConfig::default());

    let (device, scope) = AudioDevice::open_or_unavailable();
    let player = SpatialAudioPlayer::new(device);

    let terminal = ratatui::init();
    let result = App::new(config, player, narrator, scope).run(terminal);
    ratatui::restore();
    result
}

/// Logs go to a file so they never tear the TUI.
fn init_logging() -> EyreResult<()> {
    let Ok(path) = std::env::var("KATAMARAN_LOG") else {
        return Ok(());
    };

    let file = File::create(&path).wrap_err_with(|| format!("failed to create log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn game_config() -> EyreResult<GameConfig> {
    let config = GameConfig::default();
    match std::env::var("KATAMARAN_SEED") {
        Ok(seed) => {
            let seed = seed
                .parse::<u64>()
                .wrap_err_with(|| format!("KATAMARAN_SEED is not a number: {seed}"))?;
            Ok(config.with_seed(seed))
        }
        Err(_) => Ok(config),
    }
}

fn speech_backend() -> EyreResult<Box<dyn SpeechBackend>> {
    let choice = std::env::var("KATAMARAN_SPEECH").unwrap_or_else(|_| "auto".to_string());
    match choice.as_str() {
        "auto" => Ok(match CommandSpeech::detect() {
            Some(speech) => {
                tracing::info!(program = speech.program(), "using speech program");
                Box::new(speech)
            }
            None => {
                tracing::warn!("no speech program found, narration shown as captions only");
                Box::new(CaptionSpeech::new())
            }
        }),
        "captions" => Ok(Box::new(CaptionSpeech::new())),
        other => Err(eyre!(
            "unknown KATAMARAN_SPEECH value `{other}` (expected auto or captions)"
        )),
    }
}
