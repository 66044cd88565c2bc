//! # Controller
//!
//! Turns button presses into accessor calls and their results into view
//! state.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Action ──► dispatch ──► add / delete / update / search / show_all     │
//! │                                   │                                     │
//! │                 ┌─────────────────┼───────────────────┐                 │
//! │                 ▼                 ▼                   ▼                 │
//! │          parse form fields   ProductRepository   Notice (info/error)    │
//! │          (stockroom-core)    (stockroom-db)                             │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                        reload table, clear fields                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each accessor call is awaited in turn. A failed call leaves the table as
//! it was and puts a "Database error" notice on screen instead of the
//! success notice.

use stockroom_core::validation::validate_search_term;
use stockroom_core::ProductDraft;
use stockroom_db::{Database, ProductRepository};
use tracing::{info, warn};

use crate::error::Notice;
use crate::event::Action;
use crate::state::{Button, ViewModel};

const SUCCESS: &str = "Success";

/// Owns the store and the view-model.
pub struct Controller {
    db: Database,
    view: ViewModel,
}

impl Controller {
    pub fn new(db: Database) -> Self {
        Controller {
            db,
            view: ViewModel::new(),
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel {
        &mut self.view
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn products(&self) -> ProductRepository {
        self.db.products()
    }

    // =========================================================================
    // Button Handlers
    // =========================================================================

    /// Inserts the product described by the form.
    pub async fn add(&mut self) {
        let Some(draft) = self.parse_form() else {
            return;
        };

        info!(name = %draft.name, price = draft.price, stock = draft.stock, "Adding product");
        match self.products().insert(&draft).await {
            Ok(id) => {
                info!(id, "Product added");
                self.view
                    .show_notice(Notice::info(SUCCESS, "Product added successfully"));
                self.reload().await;
                self.view.form.clear();
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Deletes the selected row. Does nothing without a selection.
    pub async fn delete(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        info!(id, "Deleting product");
        match self.products().delete_by_id(id).await {
            Ok(_) => {
                self.view
                    .show_notice(Notice::info(SUCCESS, "Product deleted successfully"));
                self.reload().await;
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Overwrites the selected row with the form. Does nothing without a
    /// selection.
    pub async fn update(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(draft) = self.parse_form() else {
            return;
        };

        info!(id, name = %draft.name, "Updating product");
        match self.products().update_by_id(id, &draft).await {
            Ok(_) => {
                self.view
                    .show_notice(Notice::info(SUCCESS, "Product updated successfully"));
                self.reload().await;
                self.view.form.clear();
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Replaces the table with rows whose name contains the Name field.
    pub async fn search(&mut self) {
        let term = match validate_search_term(self.view.form.name.value()) {
            Ok(term) => term,
            Err(_) => {
                warn!("Search with an empty term");
                self.view
                    .show_notice(Notice::error("Error", "Please enter a search term"));
                return;
            }
        };

        info!(term = %term, "Searching products");
        match self.products().search_by_name(&term).await {
            Ok(rows) => {
                self.view
                    .set_status(format!("Search '{}': {} found", term, rows.len()));
                self.view.table.replace(rows);
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Reloads every row.
    pub async fn show_all(&mut self) {
        info!("Showing all products");
        self.reload().await;
    }

    /// Selection changed. Copies the row into the form; an index past the
    /// end clears the selection and leaves the form untouched.
    pub fn select(&mut self, index: Option<usize>) {
        if let Some(product) = self.view.table.select(index).cloned() {
            self.view.form.fill_from(&product);
        }
    }

    /// Runs the handler behind a button.
    pub async fn press(&mut self, button: Button) {
        self.view.button = button;
        match button {
            Button::Add => self.add().await,
            Button::Delete => self.delete().await,
            Button::Update => self.update().await,
            Button::Search => self.search().await,
            Button::ShowAll => self.show_all().await,
        }
    }

    /// Applies one action from the event loop.
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Press(button) => self.press(button).await,
            Action::SelectNext => self.select(self.view.table.next_index()),
            Action::SelectPrev => self.select(self.view.table.prev_index()),
            Action::FocusNext => self.view.focus = self.view.focus.next(),
            Action::FocusPrev => self.view.focus = self.view.focus.prev(),
            Action::Edit(field, edit) => self.view.form.field_mut(field).apply(edit),
            Action::ButtonNext => self.view.button = self.view.button.next(),
            Action::ButtonPrev => self.view.button = self.view.button.prev(),
            Action::DismissNotice => self.view.dismiss_notice(),
            Action::Quit => self.view.should_quit = true,
            Action::None => {}
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn selected_id(&self) -> Option<i64> {
        self.view.table.selected_product().map(|p| p.id)
    }

    fn parse_form(&mut self) -> Option<ProductDraft> {
        match self.view.form.to_draft() {
            Ok(draft) => Some(draft),
            Err(e) => {
                self.view.show_notice(e.into());
                None
            }
        }
    }

    async fn reload(&mut self) {
        match self.products().fetch_all().await {
            Ok(rows) => {
                self.view.set_status(format!("{} products", rows.len()));
                self.view.table.replace(rows);
            }
            Err(e) => self.fail(e.into()),
        }
    }

    fn fail(&mut self, notice: Notice) {
        warn!(message = %notice.message, "Action failed");
        self.view.show_notice(notice);
    }
}
