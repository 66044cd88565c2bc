//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────┐                    │
//! │  │    Product      │  draft()   │  ProductDraft   │                    │
//! │  │  ─────────────  │ ─────────► │  ─────────────  │                    │
//! │  │  id (store)     │            │  name           │                    │
//! │  │  name           │            │  price          │                    │
//! │  │  price          │            │  stock          │                    │
//! │  │  stock          │            └─────────────────┘                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ProductDraft` carries the three mutable fields. Insert and update take a
//! draft; the id is always assigned by the store.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Integer primary key, assigned by the store on insert.
    pub id: i64,

    /// Free-form display name. Not unique.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Units in stock.
    pub stock: i64,
}

impl Product {
    /// Returns the mutable fields of this product.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
        }
    }

    /// Price as shown in the table and copied into the form.
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The user-editable part of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductDraft {
    /// Creates a new draft.
    pub fn new(name: impl Into<String>, price: f64, stock: i64) -> Self {
        ProductDraft {
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Formats a price the way the table shows it.
///
/// Uses the shortest representation that parses back to the same value, so
/// copying a row into the form and saving it does not drift the price.
pub fn format_price(price: f64) -> String {
    price.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_copies_mutable_fields() {
        let product = Product {
            id: 7,
            name: "Widget".to_string(),
            price: 9.99,
            stock: 5,
        };

        assert_eq!(product.draft(), ProductDraft::new("Widget", 9.99, 5));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(format_price(9.99), "9.99");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(-3.25), "-3.25");
    }

    #[test]
    fn test_price_display_round_trips() {
        let price = 0.1 + 0.2;
        let shown = format_price(price);
        assert_eq!(shown.parse::<f64>().ok(), Some(price));
    }
}
