use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::state::{Focus, ViewModel};

/// Column headers, left to right.
pub const HEADERS: [&str; 4] = ["ID", "Name", "Price", "Stock"];

/// Render the product table with the current selection highlighted
pub fn render(f: &mut Frame, area: Rect, view: &ViewModel) {
    let focused = view.focus == Focus::Table;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = view.table.rows().iter().map(|p| {
        Row::new(vec![
            Cell::from(p.id.to_string()),
            Cell::from(p.name.clone()),
            Cell::from(p.price_display()),
            Cell::from(p.stock.to_string()),
        ])
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Products ({}) ", view.table.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(view.table.selected());
    f.render_stateful_widget(table, area, &mut state);
}
