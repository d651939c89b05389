//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for pocket-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Validation errors for user-submitted transaction data
    #[error("Validation error: {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Store call failures (the in-memory cache is left unchanged)
    #[error("Store error: {0}")]
    Store(String),

    /// Corrupt persisted data; handled at the storage layer by logging
    /// and falling back to defaults, never surfaced to callers
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Migration errors
    #[error("Migration error: {0}")]
    Migration(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Create a validation error for a form field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a store error
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for pocket-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
