//! # Store Error Types
//!
//! Error types for storage backends.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← returned by Storage backends               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore / BalanceStore / ... ← log it and carry on in memory        │
//! │                                                                         │
//! │  Nothing past the stores ever sees a StoreError.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only or was deleted
    /// - Disk full
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key cannot be mapped onto the medium (e.g. contains a path separator).
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// No durable medium exists in this environment.
    #[error("Storage unavailable")]
    Unavailable,
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
