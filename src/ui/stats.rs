use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

fn label(s: &str) -> Span<'static> {
    Span::styled(
        s.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )
}

fn value(s: String) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::White))
}

pub fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .title(Span::styled(
            " Status ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::new(2, 2, 1, 1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let capture = match app.capture.source() {
        None => Span::styled("unavailable", Style::default().fg(Color::Red)),
        Some(source) if !source.loaded() => Span::styled(
            "waiting for camera",
            Style::default().fg(Color::Yellow),
        ),
        Some(source) => {
            let (w, h) = source.dimensions();
            Span::styled(
                format!("live {w}x{h}"),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        }
    };

    let text = Text::from(vec![
        Line::from(vec![label("Capture: "), capture]),
        Line::from(""),
        Line::from(vec![
            label("Frames rendered: "),
            value(app.stats.frames.to_string()),
        ]),
        Line::from(vec![
            label("Render rate: "),
            value(format!("{:.1} fps", app.stats.fps)),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Page: "),
            value(app.surface.page_path().display().to_string()),
        ]),
    ]);

    f.render_widget(Paragraph::new(text).alignment(Alignment::Left), inner);
}
