use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::Layout;
use crate::error::Notice;

/// Render a notice as a centred modal over everything else
pub fn render(f: &mut Frame, area: Rect, notice: &Notice) {
    let color = if notice.is_error() {
        Color::Red
    } else {
        Color::Green
    };

    let width = 50.min(area.width.saturating_sub(4));
    let popup_area = Layout::centered(area, width, popup_height(&notice.message, width));

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, popup_area);
}

/// Rows needed for a message wrapped inside a popup of `width` columns:
/// the wrapped text, a blank line, the hint and two borders.
fn popup_height(message: &str, width: u16) -> u16 {
    let text_width = usize::from(width.saturating_sub(2).max(1));
    let lines = message.chars().count().div_ceil(text_width).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(4)
}
