use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Screen areas, top to bottom.
pub struct Areas {
    pub title: Rect,
    pub table: Rect,
    pub form: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Split the screen into title bar, product table, entry form, button
    /// bar and hint line.
    pub fn main(area: Rect) -> Areas {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title bar
                Constraint::Min(5),    // Product table
                Constraint::Length(5), // Name / Price / Stock
                Constraint::Length(3), // Buttons
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Areas {
            title: chunks[0],
            table: chunks[1],
            form: chunks[2],
            buttons: chunks[3],
            status: chunks[4],
        }
    }

    /// A rectangle of at most `width` x `height`, centred in `area`.
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}
