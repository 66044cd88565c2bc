//! # Stockroom Terminal Library
//!
//! The product inventory app: one table, three entry fields, five buttons.
//!
//! ## Module Organization
//! ```text
//! stockroom_tui/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── state/
//! │   ├── mod.rs      ◄─── ViewModel, Focus, Button
//! │   ├── config.rs   ◄─── Configuration state
//! │   ├── form.rs     ◄─── Name / Price / Stock fields
//! │   └── table.rs    ◄─── Rows on screen + selection
//! ├── controller.rs   ◄─── Button handlers (add, delete, update, search, show all)
//! ├── event.rs        ◄─── Key press ─► Action
//! ├── terminal.rs     ◄─── Raw mode, draw/poll loop
//! ├── ui/             ◄─── ratatui rendering
//! └── error.rs        ◄─── Notice (modal info/error dialogs)
//! ```

pub mod controller;
pub mod error;
pub mod event;
pub mod state;
pub mod terminal;
pub mod ui;

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use controller::Controller;
use state::ConfigState;
use stockroom_db::{Database, DbConfig};

/// Runs the application until the user quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • STOCKROOM_DB_PATH, STOCKROOM_LOG_DIR, defaults                    │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber writing to stockroom.log                       │
/// │     • Default filter overridable with RUST_LOG                          │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • One SQLite connection, products table created if missing         │
/// │                                                                         │
/// │  4. Load All Products, Run the Terminal Loop ─────────────────────────► │
/// │                                                                         │
/// │  5. Close the Database ───────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<()> {
    let config = ConfigState::from_env();

    init_tracing(&config)?;

    info!("Starting Stockroom");
    info!(db_path = ?config.database_path, "Database path determined");

    let db = open_database(&config).await?;

    let mut controller = Controller::new(db);
    controller.show_all().await;

    let result = terminal::run(&mut controller, &config.window_title).await;

    controller.database().close().await;
    info!("Stockroom stopped");

    result
}

/// Opens the configured database and checks the products table is there.
async fn open_database(config: &ConfigState) -> Result<Database> {
    let db = Database::new(DbConfig::new(config.database_path.clone()))
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    if db.health_check().await {
        info!("Database connected and schema ready");
    } else {
        warn!("Database connected but the products table is missing");
    }

    Ok(db)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Output goes to `stockroom.log` in the log directory, since the terminal
/// is taken by the UI.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO, DEBUG for stockroom crates, WARN for sqlx
fn init_tracing(config: &ConfigState) -> Result<()> {
    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create log directory {}", config.log_dir.display())
    })?;

    let log_file = config.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_database_creates_healthy_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState {
            database_path: dir.path().join("products.db"),
            ..ConfigState::default()
        };

        let db = open_database(&config).await.unwrap();

        assert!(db.health_check().await);
        assert!(config.database_path.exists());
        db.close().await;
    }

    #[tokio::test]
    async fn test_open_database_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState {
            database_path: dir.path().join("missing").join("products.db"),
            ..ConfigState::default()
        };

        let err = open_database(&config).await.unwrap_err();

        assert!(err.to_string().contains("Failed to open database at"));
    }
}
