//! # Notices
//!
//! What the user sees when an action finishes or fails.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow to the Screen                             │
//! │                                                                         │
//! │  CoreError (stockroom-core) ────────┐                                  │
//! │                                     ├──► Notice ──► modal dialog       │
//! │  DbError (stockroom-db) ────────────┘                                  │
//! │                                                                         │
//! │  Success confirmations are Notices too (NoticeKind::Info).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A notice blocks other input until the user dismisses it.

use stockroom_core::{CoreError, ValidationError};
use stockroom_db::DbError;
use thiserror::Error;

/// Whether a notice confirms something or reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Success confirmation.
    Info,
    /// Failure report.
    Error,
}

/// A modal notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{title}: {message}")]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// True for failure notices.
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Converts database errors to notices.
impl From<DbError> for Notice {
    fn from(err: DbError) -> Self {
        const TITLE: &str = "Database error";

        match err {
            DbError::NotFound { entity, id } => {
                Notice::error(TITLE, format!("{} not found: {}", entity, id))
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                Notice::error(TITLE, format!("Database connection failed: {}", e))
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema setup failed: {}", e);
                Notice::error(TITLE, format!("Could not create the products table: {}", e))
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                Notice::error(TITLE, e)
            }
            DbError::PoolExhausted => Notice::error(TITLE, "The database is busy"),
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                Notice::error(TITLE, e)
            }
        }
    }
}

/// Converts domain errors to notices.
impl From<CoreError> for Notice {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts input validation errors to notices.
impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(error = %err, "Rejected form input");
        Notice::error("Invalid input", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_becomes_error_notice() {
        let notice = Notice::from(DbError::QueryFailed("no such table: products".to_string()));

        assert!(notice.is_error());
        assert_eq!(notice.title, "Database error");
        assert_eq!(notice.message, "no such table: products");
    }

    #[test]
    fn test_validation_error_becomes_error_notice() {
        let notice = Notice::from(ValidationError::invalid_number("Price", "a number", "abc"));

        assert!(notice.is_error());
        assert_eq!(notice.title, "Invalid input");
        assert_eq!(notice.message, "Price must be a number, got 'abc'");
    }

    #[test]
    fn test_core_error_becomes_error_notice() {
        let notice = Notice::from(CoreError::from(ValidationError::required("Stock")));

        assert!(notice.is_error());
        assert_eq!(notice.title, "Invalid input");
        assert_eq!(notice.message, "Stock is required");
    }

    #[test]
    fn test_display() {
        let notice = Notice::info("Success", "Product added successfully");

        assert!(!notice.is_error());
        assert_eq!(notice.to_string(), "Success: Product added successfully");
    }
}
