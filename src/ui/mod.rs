pub mod controls;
pub mod stats;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let background = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));

    let inner = background.inner(area);
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // settings panel
            Constraint::Min(8),     // status panel
        ])
        .split(inner);

    controls::render_controls(f, app, chunks[0]);
    stats::render_stats(f, app, chunks[1]);
}
