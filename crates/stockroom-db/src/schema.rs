//! # Schema Bootstrap
//!
//! Creates the `products` table when it is missing.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Startup                                            │
//! │                                                                         │
//! │  Database::new(config)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ensure_schema(pool)                                                   │
//! │       │                                                                 │
//! │       ├── table exists?  → nothing happens, rows are kept              │
//! │       └── table missing? → CREATE TABLE products (...)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no versioned migrations. The single statement below is
//! idempotent and is run on every open.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the only table the application manages.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id    INTEGER PRIMARY KEY,
    name  TEXT,
    price REAL,
    stock INTEGER
)
"#;

/// Creates the products table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring products table exists");

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Returns true when the products table is present.
pub async fn table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
    )
    .fetch_one(pool)
    .await?;

    Ok(count == 1)
}
