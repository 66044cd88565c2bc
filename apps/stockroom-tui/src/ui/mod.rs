pub mod button_bar;
pub mod dialog;
pub mod form_panel;
pub mod layout;
pub mod product_table;
pub mod status_bar;
pub mod title_bar;

use ratatui::Frame;

use crate::state::ViewModel;

/// Render the whole screen from the view-model
pub fn render(f: &mut Frame, view: &ViewModel, title: &str) {
    let areas = layout::Layout::main(f.area());

    title_bar::render(f, areas.title, title);
    product_table::render(f, areas.table, view);
    form_panel::render(f, areas.form, view);
    button_bar::render(f, areas.buttons, view);
    status_bar::render(f, areas.status, view);

    // Notice goes last so it sits on top
    if let Some(ref notice) = view.notice {
        dialog::render(f, f.area(), notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Notice;
    use ratatui::{backend::TestBackend, Terminal};
    use stockroom_core::Product;

    fn draw(view: &ViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render(f, view, "Product Management"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn view_with_widget() -> ViewModel {
        let mut view = ViewModel::new();
        view.table.replace(vec![Product {
            id: 1,
            name: "Widget".to_string(),
            price: 9.99,
            stock: 5,
        }]);
        view
    }

    #[test]
    fn test_renders_table_form_and_buttons() {
        let screen = draw(&view_with_widget());

        assert!(screen.contains("Product Management"));
        for header in product_table::HEADERS {
            assert!(screen.contains(header), "missing header {header}");
        }
        assert!(screen.contains("Widget"));
        assert!(screen.contains("9.99"));
        assert!(screen.contains("Price:"));
        assert!(screen.contains("Stock:"));
        assert!(screen.contains("[ Show All ]"));
    }

    #[test]
    fn test_renders_notice() {
        let mut view = view_with_widget();
        view.show_notice(Notice::error("Error", "Please enter a search term"));

        let screen = draw(&view);

        assert!(screen.contains("Please enter a search term"));
        assert!(screen.contains("press any key"));
    }
}
