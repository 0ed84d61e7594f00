//! TUI module for katamaran
//!
//! Everything here is optional for playing: the games are fully audible.
//! The screen mirrors the game state, the last narration and the output.

mod caption;
pub mod spectrum;
mod status;
mod waveform;

use katamaran::game::{GamePhase, ModeKind, Snapshot};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use caption::render_caption;
use spectrum::render_spectrum;
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// What is on screen
pub enum Screen {
    Menu {
        selected: Option<ModeKind>,
        launching: Option<ModeKind>,
    },
    Game(Snapshot),
}

/// Everything the renderer reads, borrowed from the app for one frame
pub struct View<'a> {
    pub screen: Screen,
    pub caption: &'a str,
    pub audio: &'a [f32],
    pub spectrum: &'a [(f64, f64)],
    pub sample_rate: Option<u32>,
    pub voice: Option<&'a str>,
}

pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();

    // Status, caption, scopes, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .split(area);

    let stats = AudioStats::from_buffer(view.audio);
    render_status(frame, chunks[0], view, &stats);
    render_caption(frame, chunks[1], view.caption, view.voice);

    let scopes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_waveform(frame, scopes[0], view.audio);
    let marker = match &view.screen {
        Screen::Game(game) => game.stimulus.and_then(spectrum::stimulus_frequency),
        Screen::Menu { .. } => None,
    };
    render_spectrum(frame, scopes[1], view.spectrum, marker);

    let help = Paragraph::new(help_text(&view.screen))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Menu { .. } => " [1-3] Modo  [Enter] Jugar  [4] Info  [0] Repetir  [Q] Salir",
        Screen::Game(game) => match game.phase {
            GamePhase::Intro | GamePhase::Ready => " [1/Enter] Comenzar  [0] Volver  [Q] Salir",
            GamePhase::GameOver => " [1/Enter] Jugar de nuevo  [0] Volver  [Q] Salir",
            GamePhase::Paused => " [P/Espacio] Continuar  [0] Volver  [Q] Salir",
            _ => " [Flechas/WASD] Responder  [P/Espacio] Pausa  [Esc] Volver  [Q] Salir",
        },
    }
}
