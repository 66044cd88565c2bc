use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar: window title on the left, clock on the right
pub fn render(f: &mut Frame, area: Rect, title: &str) {
    let time_str = Local::now().format("%H:%M:%S").to_string();

    let mut spans = vec![Span::styled(
        format!(" {} ", title),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    // Right-aligned time
    let width = area.width as usize;
    let current_len = title.chars().count() + 2;
    let padding = width.saturating_sub(current_len + time_str.len() + 1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, area);
}
