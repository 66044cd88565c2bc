//! # Configuration State
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "products.db";

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "stockroom.log";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// SQLite file holding the products table.
    pub database_path: PathBuf,

    /// Directory that receives `stockroom.log`.
    pub log_dir: PathBuf,

    /// Window title drawn in the title bar.
    pub window_title: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: `products.db` in the working directory
    /// - Logs: platform data directory, or the working directory
    fn default() -> Self {
        ConfigState {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_dir: default_log_dir(),
            window_title: "Product Management".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DB_PATH`: Override the database file
    /// - `STOCKROOM_LOG_DIR`: Override the log directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("STOCKROOM_DB_PATH").filter(|p| !p.is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("STOCKROOM_LOG_DIR").filter(|d| !d.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }

    /// Full path of the log file.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

fn default_log_dir() -> PathBuf {
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
