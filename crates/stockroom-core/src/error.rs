//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Anything the domain layer rejects              │
//! │  └── ValidationError  - Form input that cannot be converted            │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  stockroom-tui (in app)                                                │
//! │  └── Notice           - What the user sees (modal dialog)              │
//! │                                                                         │
//! │  Flow: CoreError ───────┐                                               │
//! │        DbError ─────────┴──► Notice ──► Modal dialog                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the domain layer.
///
/// Form parsing wraps its [`ValidationError`] here so the app converts a
/// single type into a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Form input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result alias for domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while converting form text, before any statement reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field text is not a number of the expected kind.
    #[error("{field} must be {expected}, got '{value}'")]
    InvalidNumber {
        field: String,
        expected: String,
        value: String,
    },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidNumber error.
    pub fn invalid_number(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }
}
