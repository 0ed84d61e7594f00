//! Status bar widget - shows mode, phase, score, clock and audio stats

use katamaran::game::{GamePhase, ModeKind, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Screen, View};

/// Output level for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = katamaran::dsp::mix::peak(buffer);
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// 75 -> "1:15"
fn clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn phase_color(phase: GamePhase) -> Color {
    match phase {
        GamePhase::Playing | GamePhase::Inputting => Color::Green,
        GamePhase::Listening => Color::Cyan,
        GamePhase::Paused | GamePhase::Resuming => Color::Yellow,
        GamePhase::GameOver | GamePhase::Terminated => Color::Red,
        GamePhase::Intro | GamePhase::Ready => Color::White,
    }
}

fn game_spans(game: &Snapshot) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(
            format!(" {}  ", game.mode.title()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{}  ", game.phase.label()),
            Style::default().fg(phase_color(game.phase)),
        ),
        Span::styled(
            format!("Puntos {}  Récord {}  ", game.score, game.high_score),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("⏱ {}  ", clock(game.time_left)),
            Style::default().fg(if game.time_left <= 10 {
                Color::Red
            } else {
                Color::White
            }),
        ),
    ];

    if game.mode == ModeKind::Memory {
        spans.push(Span::styled(
            format!("Nivel {}  {}/{}  ", game.level, game.input_len, game.sequence_len),
            Style::default().fg(Color::Magenta),
        ));
    } else if game.combo > 0 {
        spans.push(Span::styled(
            format!("COMBO x{}  ", game.combo),
            Style::default().fg(Color::Magenta),
        ));
    }
    if game.counting_down {
        spans.push(Span::styled("3, 2, 1…  ", Style::default().fg(Color::Yellow)));
    }
    spans
}

pub fn render_status(frame: &mut Frame, area: Rect, view: &View, stats: &AudioStats) {
    let block = Block::default().title(" katamaran ").borders(Borders::ALL);

    let mut spans = match &view.screen {
        Screen::Menu { selected, launching } => {
            let choice = match (launching, selected) {
                (Some(mode), _) => format!("Iniciando {}…  ", mode.title()),
                (None, Some(mode)) => format!("Opción {}: {}  ", mode.option(), mode.title()),
                (None, None) => "Menú principal  ".to_string(),
            };
            vec![Span::styled(format!(" {choice}"), Style::default().fg(Color::Cyan))]
        }
        Screen::Game(game) => game_spans(game),
    };

    let device = match view.sample_rate {
        Some(rate) => format!("{:.1}kHz  ", rate as f32 / 1000.0),
        None => "sin audio  ".to_string(),
    };
    spans.push(Span::styled(device, Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
        Style::default().fg(Color::Magenta),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
