//! # Form State
//!
//! The three entry fields under the product table.
//!
//! Fields are addressed by [`FormField`], never by position, so copying a
//! row into the form and reading it back does not depend on field order.

use stockroom_core::validation::parse_draft;
use stockroom_core::{CoreResult, Product, ProductDraft};

/// One of the three entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Stock,
}

impl FormField {
    /// All fields, in display order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Price, FormField::Stock];

    /// Label drawn next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Stock => "Stock",
        }
    }
}

/// A single-line edit applied to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// A single-line text input with a cursor.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.len();
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies one edit.
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Insert(c) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            Edit::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            Edit::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
            }
            Edit::Left => self.cursor = self.cursor.saturating_sub(1),
            Edit::Right => self.cursor = (self.cursor + 1).min(self.len()),
            Edit::Home => self.cursor = 0,
            Edit::End => self.cursor = self.len(),
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// The Name / Price / Stock entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: TextField,
    pub price: TextField,
    pub stock: TextField,
}

impl FormState {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextField {
        match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
        }
    }

    /// Copies a product's name, price and stock into the matching fields,
    /// replacing whatever they held.
    pub fn fill_from(&mut self, product: &Product) {
        self.name.set(product.name.clone());
        self.price.set(product.price_display());
        self.stock.set(product.stock.to_string());
    }

    /// Empties all three fields.
    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
    }

    /// Parses the fields into a draft: price as a float, stock as an integer.
    pub fn to_draft(&self) -> CoreResult<ProductDraft> {
        Ok(parse_draft(
            self.name.value(),
            self.price.value(),
            self.stock.value(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{CoreError, ValidationError};

    fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.apply(Edit::Insert(c));
        }
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::new();
        type_text(&mut field, "Wdget");

        field.apply(Edit::Home);
        field.apply(Edit::Right);
        field.apply(Edit::Insert('i'));
        assert_eq!(field.value(), "Widget");
        assert_eq!(field.cursor(), 2);

        field.apply(Edit::End);
        field.apply(Edit::Backspace);
        assert_eq!(field.value(), "Widge");

        field.apply(Edit::Home);
        field.apply(Edit::Delete);
        assert_eq!(field.value(), "idge");
    }

    #[test]
    fn test_text_field_multibyte_chars() {
        let mut field = TextField::new();
        type_text(&mut field, "Café");

        field.apply(Edit::Left);
        field.apply(Edit::Backspace);
        assert_eq!(field.value(), "Caé");

        field.apply(Edit::End);
        field.apply(Edit::Backspace);
        assert_eq!(field.value(), "Ca");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut field = TextField::new();
        field.apply(Edit::Left);
        field.apply(Edit::Backspace);
        field.apply(Edit::Delete);
        assert_eq!(field.cursor(), 0);

        field.set("ab");
        field.apply(Edit::Right);
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_fill_from_uses_named_fields() {
        let mut form = FormState::new();
        form.price.set("old");

        form.fill_from(&Product {
            id: 1,
            name: "Widget".to_string(),
            price: 12.5,
            stock: 3,
        });

        assert_eq!(form.field(FormField::Name).value(), "Widget");
        assert_eq!(form.field(FormField::Price).value(), "12.5");
        assert_eq!(form.field(FormField::Stock).value(), "3");
    }

    #[test]
    fn test_clear_and_to_draft() {
        let mut form = FormState::new();
        form.name.set("Widget");
        form.price.set("9.99");
        form.stock.set("5");

        assert_eq!(form.to_draft(), Ok(ProductDraft::new("Widget", 9.99, 5)));

        form.clear();
        assert_eq!(form, FormState::new());
        assert_eq!(
            form.to_draft(),
            Err(CoreError::Validation(ValidationError::required("Price")))
        );
    }
}
