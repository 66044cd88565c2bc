//! # Application State
//!
//! Everything the screen shows, owned by the [`Controller`](crate::controller::Controller)
//! and handed to the renderer by reference.
//!
//! ## State Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ViewModel                                      │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌─────────────────────┐  ┌───────────────────┐  │
//! │  │  table           │  │  form               │  │  notice           │  │
//! │  │  rows, selected  │  │  name, price, stock │  │  Option<Notice>   │  │
//! │  └──────────────────┘  └─────────────────────┘  └───────────────────┘  │
//! │                                                                         │
//! │  focus · button · status · should_quit                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`ConfigState`] is separate: it is resolved once at startup and never
//! changes.

pub mod config;
mod form;
mod table;

pub use config::ConfigState;
pub use form::{Edit, FormField, FormState, TextField};
pub use table::ProductTable;

use crate::error::Notice;

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Field(FormField),
    Buttons,
}

impl Focus {
    /// Tab order: table, Name, Price, Stock, buttons, then back to the table.
    pub fn next(self) -> Self {
        match self {
            Focus::Table => Focus::Field(FormField::Name),
            Focus::Field(FormField::Name) => Focus::Field(FormField::Price),
            Focus::Field(FormField::Price) => Focus::Field(FormField::Stock),
            Focus::Field(FormField::Stock) => Focus::Buttons,
            Focus::Buttons => Focus::Table,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Table => Focus::Buttons,
            Focus::Field(FormField::Name) => Focus::Table,
            Focus::Field(FormField::Price) => Focus::Field(FormField::Name),
            Focus::Field(FormField::Stock) => Focus::Field(FormField::Price),
            Focus::Buttons => Focus::Field(FormField::Stock),
        }
    }
}

/// The five command buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    Delete,
    Update,
    Search,
    ShowAll,
}

impl Button {
    /// Display order, left to right.
    pub const ALL: [Button; 5] = [
        Button::Add,
        Button::Delete,
        Button::Update,
        Button::Search,
        Button::ShowAll,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Button::Add => "Add",
            Button::Delete => "Delete",
            Button::Update => "Update",
            Button::Search => "Search",
            Button::ShowAll => "Show All",
        }
    }

    /// Function key shortcut, F2 through F6.
    pub fn shortcut(&self) -> u8 {
        match self {
            Button::Add => 2,
            Button::Delete => 3,
            Button::Update => 4,
            Button::Search => 5,
            Button::ShowAll => 6,
        }
    }

    /// Button for a function key, if any.
    pub fn from_shortcut(key: u8) -> Option<Self> {
        Button::ALL.into_iter().find(|b| b.shortcut() == key)
    }

    fn index(self) -> usize {
        Button::ALL.iter().position(|&b| b == self).unwrap_or(0)
    }

    /// Button to the right, wrapping around.
    pub fn next(self) -> Self {
        Button::ALL[(self.index() + 1) % Button::ALL.len()]
    }

    /// Button to the left, wrapping around.
    pub fn prev(self) -> Self {
        Button::ALL[(self.index() + Button::ALL.len() - 1) % Button::ALL.len()]
    }
}

/// The full screen state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub form: FormState,
    pub table: ProductTable,
    /// Modal notice; while set, other input is blocked.
    pub notice: Option<Notice>,
    pub focus: Focus,
    /// Highlighted button on the button bar.
    pub button: Button,
    /// Short text for the hint line.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        ViewModel {
            form: FormState::new(),
            table: ProductTable::new(),
            notice: None,
            focus: Focus::Table,
            button: Button::Add,
            status: None,
            should_quit: false,
        }
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a modal notice.
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Table;
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }

        assert_eq!(
            seen,
            vec![
                Focus::Table,
                Focus::Field(FormField::Name),
                Focus::Field(FormField::Price),
                Focus::Field(FormField::Stock),
                Focus::Buttons,
            ]
        );
        assert_eq!(focus.next(), Focus::Table);
        assert_eq!(Focus::Table.prev(), Focus::Buttons);
        assert_eq!(Focus::Buttons.prev().next(), Focus::Buttons);
    }

    #[test]
    fn test_button_order_and_shortcuts() {
        assert_eq!(Button::Add.prev(), Button::ShowAll);
        assert_eq!(Button::ShowAll.next(), Button::Add);
        assert_eq!(Button::Delete.next(), Button::Update);

        assert_eq!(Button::from_shortcut(2), Some(Button::Add));
        assert_eq!(Button::from_shortcut(6), Some(Button::ShowAll));
        assert_eq!(Button::from_shortcut(7), None);
        assert_eq!(Button::ShowAll.label(), "Show All");
    }

    #[test]
    fn test_notice_lifecycle() {
        let mut view = ViewModel::new();
        assert!(view.notice.is_none());

        view.show_notice(Notice::info("Success", "done"));
        assert!(view.notice.is_some());

        view.dismiss_notice();
        assert!(view.notice.is_none());
    }
}
