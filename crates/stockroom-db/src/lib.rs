//! # stockroom-db: Storage Accessor for Stockroom
//!
//! Database access for the product inventory. Uses a local SQLite file through
//! sqlx. Every operation is a single parameterized statement that commits on
//! its own.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Controller (button press)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (schema.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ one long-lived│◄───│ fetch_all     │    │ CREATE TABLE │  │   │
//! │  │   │ connection    │    │ insert ...    │    │ IF NOT EXISTS│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite file (products.db)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection setup and the [`Database`] handle
//! - [`schema`] - Table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - [`ProductRepository`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::ProductDraft;
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("products.db")).await?;
//!
//! let id = db.products().insert(&ProductDraft::new("Widget", 9.99, 5)).await?;
//! let rows = db.products().fetch_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
