//! Error types for the parts store
//!
//! "Not found" is deliberately absent: lookups, updates and deletes report a
//! missing id through `Option` / `bool`, never through an error.

use std::time::Duration;

use thiserror::Error;

/// Transaction control called in a state that does not allow it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: {reason}")]
pub struct IllegalStateError {
    pub operation: &'static str,
    pub reason: String,
}

impl IllegalStateError {
    pub fn no_active_transaction(operation: &'static str) -> Self {
        Self {
            operation,
            reason: "no active transaction".to_string(),
        }
    }

    pub fn transaction_already_active(operation: &'static str) -> Self {
        Self {
            operation,
            reason: "a transaction is already active".to_string(),
        }
    }
}

/// General store error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    IllegalState(#[from] IllegalStateError),

    #[error("Reset timed out after {waited:?} waiting for the active transaction")]
    ResetTimeout { waited: Duration },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Check if this is a transaction contract violation
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, StoreError::IllegalState(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
