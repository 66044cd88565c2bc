//! # Database Connection
//!
//! Connection setup for the local SQLite file.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection                                │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file path and timeouts                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Open file + create table                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐                                 │  max = min = 1            │
//! │  │  │Conn │  held until the process exits   │  no idle timeout          │
//! │  │  └─────┘                                 │  no max lifetime          │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The application is single-user, so one connection is all it needs. sqlx
//! still requires a pool type; sizing it to one keeps the "one long-lived
//! connection" model and lets in-memory databases survive between calls.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;

/// Path value that selects a private in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./products.db")
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait for the connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to create the products table on connect.
    /// Default: true
    pub ensure_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            ensure_schema: true,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to create the products table on connect.
    pub fn ensure_schema(mut self, ensure: bool) -> Self {
        self.ensure_schema = ensure;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Each in-memory database is private to the `Database` that opened it.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            connect_timeout: Duration::from_secs(5),
            ensure_schema: true,
        }
    }

    /// Returns true if this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
        };

        Ok(options
            // NORMAL synchronous: safe from corruption, may lose the last
            // statement on power loss
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Cloning is cheap; clones share the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    /// The single-connection SQLite pool.
    pool: SqlitePool,
}

impl Database {
    /// Opens the database and prepares the products table.
    ///
    /// ## What This Does
    /// 1. Opens the database file, creating it if it doesn't exist
    /// 2. Opens exactly one connection and keeps it for the process lifetime
    /// 3. Creates the products table if missing (if enabled)
    ///
    /// Opening the same file again is harmless: existing rows are kept.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Database connection opened");

        let db = Database { pool };

        if config.ensure_schema {
            schema::ensure_schema(&db.pool).await?;
        }

        Ok(db)
    }

    /// Returns a reference to the connection pool.
    ///
    /// For statements not covered by the repository.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = db.products().fetch_all().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes the connection.
    ///
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection");
        self.pool.close().await;
    }

    /// Checks that the database answers queries and the products table exists.
    pub async fn health_check(&self) -> bool {
        schema::table_exists(&self.pool).await.unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductDraft;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .connect_timeout(Duration::from_secs(2))
            .ensure_schema(false);

        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(!config.ensure_schema);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let a = Database::new(DbConfig::in_memory()).await.unwrap();
        let b = Database::new(DbConfig::in_memory()).await.unwrap();

        a.products()
            .insert(&ProductDraft::new("Widget", 1.0, 1))
            .await
            .unwrap();

        assert_eq!(a.products().count().await.unwrap(), 1);
        assert_eq!(b.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_file_database_reopens_with_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let id = db
            .products()
            .insert(&ProductDraft::new("Widget", 9.99, 5))
            .await
            .unwrap();
        db.close().await;

        assert!(path.exists());

        let reopened = Database::new(DbConfig::new(&path)).await.unwrap();
        let rows = reopened.products().fetch_all().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].name, "Widget");
        reopened.close().await;
    }

    #[tokio::test]
    async fn test_closed_database_reports_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        assert!(db.products().fetch_all().await.is_err());
    }

    #[tokio::test]
    async fn test_unopenable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("products.db");

        let result = Database::new(DbConfig::new(path)).await;

        assert!(matches!(result, Err(DbError::ConnectionFailed(_))));
    }
}
