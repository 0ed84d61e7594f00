//! Caption widget - the last narrated line

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_caption(frame: &mut Frame, area: Rect, caption: &str, voice: Option<&str>) {
    let title = match voice {
        Some(voice) => format!(" Narración ({voice}) "),
        None => " Narración ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let paragraph = Paragraph::new(caption)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
