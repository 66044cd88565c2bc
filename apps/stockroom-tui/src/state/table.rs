//! # Product Table State
//!
//! The rows currently on screen and which one is selected.
//!
//! The table is the only copy of store data the app keeps. It is replaced
//! wholesale after every action, never patched row by row.

use stockroom_core::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTable {
    rows: Vec<Product>,
    selected: Option<usize>,
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Swaps in a fresh set of rows. The selection is cleared.
    pub fn replace(&mut self, rows: Vec<Product>) {
        self.rows = rows;
        self.selected = None;
    }

    /// Selects a row. An out-of-range index clears the selection.
    pub fn select(&mut self, index: Option<usize>) -> Option<&Product> {
        self.selected = index.filter(|&i| i < self.rows.len());
        self.selected_product()
    }

    /// Index one row below the selection, stopping at the last row.
    pub fn next_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        Some(match self.selected {
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
        })
    }

    /// Index one row above the selection, stopping at the first row.
    pub fn prev_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        })
    }
}
