//! # stockroom-core: Domain Types for Stockroom
//!
//! The single managed entity ([`Product`]) and the rules for turning raw
//! form text into values the database layer accepts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockroom-tui (terminal front-end)              │   │
//! │  │      Table ──► Form fields ──► Buttons ──► Notices              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │    types      │  │  validation   │  │    error      │      │   │
//! │  │   │ Product       │  │ parse_price   │  │ Validation    │      │   │
//! │  │   │ ProductDraft  │  │ parse_stock   │  │               │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Storage Accessor)                 │   │
//! │  │                 SQLite file, one `products` table               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and `ProductDraft`
//! - [`error`] - `CoreError` and `ValidationError`
//! - [`validation`] - Form-input parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::parse_draft;
//!
//! let draft = parse_draft("Widget", "9.99", "5").unwrap();
//! assert_eq!(draft.name, "Widget");
//! assert_eq!(draft.stock, 5);
//!
//! assert!(parse_draft("Widget", "nine", "5").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
