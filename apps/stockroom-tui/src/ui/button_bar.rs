use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{Button, Focus, ViewModel};

/// Render the five command buttons with their function keys
pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let focused = view.focus == Focus::Buttons;

    let mut spans = Vec::new();
    for button in Button::ALL {
        let style = if focused && button == view.button {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(
            format!("F{}", button.shortcut()),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(format!("[ {} ]", button.label()), style));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            })),
    );

    f.render_widget(paragraph, area);
}
