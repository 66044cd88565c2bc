//! Key handling for the terminal front-end
//!
//! Key presses become [`Action`]s here; the [`Controller`](crate::controller::Controller)
//! applies them. Mapping is pure so it can be tested without a terminal.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::state::{Button, Edit, Focus, FormField, ViewModel};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a button's handler
    Press(Button),
    /// Move the table selection down
    SelectNext,
    /// Move the table selection up
    SelectPrev,
    FocusNext,
    FocusPrev,
    /// Edit a form field
    Edit(FormField, Edit),
    /// Highlight the next button
    ButtonNext,
    /// Highlight the previous button
    ButtonPrev,
    DismissNotice,
    Quit,
    /// Key has no binding
    None,
}

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a key event to an action
pub fn map_key(view: &ViewModel, key: KeyEvent) -> Action {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') | KeyCode::Char('q') = key.code {
            return Action::Quit;
        }
    }

    // Any key closes an open notice
    if view.notice.is_some() {
        return Action::DismissNotice;
    }

    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Tab => return Action::FocusNext,
        KeyCode::BackTab => return Action::FocusPrev,
        KeyCode::F(n) => {
            return Button::from_shortcut(n)
                .map(Action::Press)
                .unwrap_or(Action::None)
        }
        _ => {}
    }

    match view.focus {
        Focus::Table => map_table_key(key),
        Focus::Field(field) => map_field_key(field, key),
        Focus::Buttons => map_button_key(view.button, key),
    }
}

fn map_table_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
        _ => Action::None,
    }
}

fn map_field_key(field: FormField, key: KeyEvent) -> Action {
    let edit = match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Edit::Insert(c),
        KeyCode::Backspace => Edit::Backspace,
        KeyCode::Delete => Edit::Delete,
        KeyCode::Left => Edit::Left,
        KeyCode::Right => Edit::Right,
        KeyCode::Home => Edit::Home,
        KeyCode::End => Edit::End,
        KeyCode::Enter | KeyCode::Down => return Action::FocusNext,
        KeyCode::Up => return Action::FocusPrev,
        _ => return Action::None,
    };
    Action::Edit(field, edit)
}

fn map_button_key(selected: Button, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Left => Action::ButtonPrev,
        KeyCode::Right => Action::ButtonNext,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Press(selected),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Notice;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_with_focus(focus: Focus) -> ViewModel {
        ViewModel {
            focus,
            ..ViewModel::new()
        }
    }

    #[test]
    fn test_quit_keys() {
        let table = view_with_focus(Focus::Table);
        let field = view_with_focus(Focus::Field(FormField::Name));

        assert_eq!(map_key(&table, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(map_key(&table, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            map_key(&field, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        // 'q' is text while a field has focus
        assert_eq!(
            map_key(&field, key(KeyCode::Char('q'))),
            Action::Edit(FormField::Name, Edit::Insert('q'))
        );
    }

    #[test]
    fn test_notice_swallows_keys() {
        let mut view = view_with_focus(Focus::Table);
        view.show_notice(Notice::info("Success", "done"));

        assert_eq!(map_key(&view, key(KeyCode::Char('q'))), Action::DismissNotice);
        assert_eq!(map_key(&view, key(KeyCode::F(2))), Action::DismissNotice);
        assert_eq!(map_key(&view, key(KeyCode::Esc)), Action::DismissNotice);
    }

    #[test]
    fn test_function_key_shortcuts() {
        let view = view_with_focus(Focus::Field(FormField::Price));

        assert_eq!(map_key(&view, key(KeyCode::F(2))), Action::Press(Button::Add));
        assert_eq!(map_key(&view, key(KeyCode::F(3))), Action::Press(Button::Delete));
        assert_eq!(map_key(&view, key(KeyCode::F(4))), Action::Press(Button::Update));
        assert_eq!(map_key(&view, key(KeyCode::F(5))), Action::Press(Button::Search));
        assert_eq!(map_key(&view, key(KeyCode::F(6))), Action::Press(Button::ShowAll));
        assert_eq!(map_key(&view, key(KeyCode::F(1))), Action::None);
    }

    #[test]
    fn test_focus_and_navigation() {
        let table = view_with_focus(Focus::Table);
        assert_eq!(map_key(&table, key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(map_key(&table, key(KeyCode::BackTab)), Action::FocusPrev);
        assert_eq!(map_key(&table, key(KeyCode::Down)), Action::SelectNext);
        assert_eq!(map_key(&table, key(KeyCode::Up)), Action::SelectPrev);

        let field = view_with_focus(Focus::Field(FormField::Stock));
        assert_eq!(
            map_key(&field, key(KeyCode::Backspace)),
            Action::Edit(FormField::Stock, Edit::Backspace)
        );
        assert_eq!(map_key(&field, key(KeyCode::Enter)), Action::FocusNext);
    }

    #[test]
    fn test_button_bar() {
        let mut view = view_with_focus(Focus::Buttons);
        view.button = Button::Update;

        assert_eq!(map_key(&view, key(KeyCode::Left)), Action::ButtonPrev);
        assert_eq!(map_key(&view, key(KeyCode::Right)), Action::ButtonNext);
        assert_eq!(map_key(&view, key(KeyCode::Enter)), Action::Press(Button::Update));
    }
}
