use crate::app::App;
use common::settings::MAX_WHITESPACE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

fn checkbox(key: &str, label: &str, on: bool) -> Line<'static> {
    let mark = if on { "[x]" } else { "[ ]" };

    Line::from(vec![
        Span::styled(
            format!("{mark} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("({key}) "), Style::default().fg(Color::Yellow)),
        Span::styled(label.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .title(Span::styled(
            " Settings ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::new(2, 2, 0, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // checkboxes
            Constraint::Length(3), // whitespace slider
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    let checkboxes = Text::from(vec![
        checkbox("v", "Show Video", app.settings.show_video),
        checkbox("c", "Coloured", app.settings.coloured),
        checkbox("r", "Reverse Characters", app.settings.reversed),
    ]);
    f.render_widget(Paragraph::new(checkboxes), chunks[0]);

    let slider = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(app.settings.whitespace as f64 / MAX_WHITESPACE as f64)
        .label(format!("Whitespace: {}", app.settings.whitespace));
    f.render_widget(slider, chunks[1]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" whitespace | "),
        Span::styled("0", Style::default().fg(Color::Yellow)),
        Span::raw(" reset | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(hints, chunks[2]);
}
