use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{Focus, ViewModel};

/// Render the hint line (bottom bar)
pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let hints = match view.focus {
        Focus::Table => "↑/↓: select | Tab: next | F2-F6: buttons | q: quit",
        Focus::Field(_) => "Type to edit | Tab/Enter: next | F2-F6: buttons | Esc: quit",
        Focus::Buttons => "←/→: choose | Enter: press | Tab: next | Esc: quit",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(ref msg) = view.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
