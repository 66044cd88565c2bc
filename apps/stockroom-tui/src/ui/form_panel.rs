use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{Focus, FormField, ViewModel};

/// Label column width, including the trailing ": ".
const LABEL_WIDTH: u16 = 8;

/// Render the Name / Price / Stock fields and place the cursor in the
/// focused one
pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let focused_field = match view.focus {
        Focus::Field(field) => Some(field),
        _ => None,
    };

    let block = Block::default()
        .title(" Product ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused_field.is_some() {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let is_focused = focused_field == Some(field);
            let label_style = if is_focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH as usize),
                    label_style,
                ),
                Span::raw(view.form.field(field).value().to_string()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);

    // Cursor only when a field has focus and no notice covers it
    if let (Some(field), None) = (focused_field, &view.notice) {
        let row = FormField::ALL
            .iter()
            .position(|&candidate| candidate == field)
            .unwrap_or(0) as u16;
        let col = cursor_column(view.form.field(field).cursor());
        if row < inner.height && col < inner.width {
            f.set_cursor_position(Position::new(inner.x + col, inner.y + row));
        }
    }
}

/// Terminal column of a field cursor, relative to the panel's inner area.
fn cursor_column(cursor: usize) -> u16 {
    LABEL_WIDTH.saturating_add(u16::try_from(cursor).unwrap_or(u16::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_follows_label() {
        assert_eq!(cursor_column(0), LABEL_WIDTH);
        assert_eq!(cursor_column(3), LABEL_WIDTH + 3);
    }

    #[test]
    fn test_cursor_column_saturates_on_long_input() {
        assert_eq!(cursor_column(70_000), u16::MAX);
        assert_eq!(cursor_column(usize::MAX), u16::MAX);
    }
}
