//! # Validation Module
//!
//! Turns raw form text into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal form                                                │
//! │  └── Raw text, no checks while typing                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── price → f64 (finite)                                              │
//! │  ├── stock → i64                                                       │
//! │  └── search term must not be empty                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── PRIMARY KEY only                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only type coercion is checked. Negative prices and stock are accepted,
//! and so is an empty name.

use crate::error::ValidationError;
use crate::types::ProductDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Fields
// =============================================================================

/// Parses the Price field.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_price;
///
/// assert_eq!(parse_price(" 9.99 ").unwrap(), 9.99);
/// assert_eq!(parse_price("-1").unwrap(), -1.0);
/// assert!(parse_price("").is_err());
/// assert!(parse_price("NaN").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::required("Price"));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::invalid_number("Price", "a number", text)),
    }
}

/// Parses the Stock field.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_stock;
///
/// assert_eq!(parse_stock("5").unwrap(), 5);
/// assert!(parse_stock("5.5").is_err());
/// ```
pub fn parse_stock(raw: &str) -> ValidationResult<i64> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::required("Stock"));
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::invalid_number("Stock", "a whole number", text))
}

/// Parses all three form fields into a draft.
///
/// The name is taken as typed. Price is checked before stock, so the first
/// bad field is the one reported.
pub fn parse_draft(name: &str, price: &str, stock: &str) -> ValidationResult<ProductDraft> {
    let price = parse_price(price)?;
    let stock = parse_stock(stock)?;

    Ok(ProductDraft::new(name, price, stock))
}

// =============================================================================
// Search
// =============================================================================

/// Validates a search term.
///
/// ## Rules
/// - Must not be empty (an empty search is refused, it does not list everything)
/// - Used verbatim otherwise; `%` and `_` keep their LIKE meaning
///
/// ## Returns
/// The term, unchanged.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    if term.is_empty() {
        return Err(ValidationError::required("search term"));
    }

    Ok(term.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
