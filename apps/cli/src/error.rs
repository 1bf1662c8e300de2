//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in RegionCart                             │
//! │                                                                         │
//! │  Cart / balance / region operations ──► never fail (absorbed below)    │
//! │                                                                         │
//! │  Config file malformed ──────────────┐                                 │
//! │  Catalog request failed ─────────────┼──► AppError ──► main            │
//! │  Catalog payload not decodable ──────┤       │                         │
//! │  Writing output failed ──────────────┘       ▼                         │
//! │                                    "error[NETWORK_ERROR]: ..."         │
//! │                                    exit status 1                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use regioncart_core::CoreError;
use thiserror::Error;

/// Error returned from CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command argument was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog endpoint could not be reached or answered with an error.
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Domain error (e.g. undecodable catalog).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Local file or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Machine-readable error category, printed alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ConfigError,
    InvalidInput,
    NetworkError,
    InvalidCatalog,
    IoError,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::InvalidCatalog => "INVALID_CATALOG",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

impl AppError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config(_) => ErrorCode::ConfigError,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Http(_) => ErrorCode::NetworkError,
            AppError::Core(CoreError::InvalidCatalog(_)) => ErrorCode::InvalidCatalog,
            AppError::Core(CoreError::Validation(_)) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) => ErrorCode::Internal,
        }
    }
}

/// Result type for CLI operations.
pub type AppResult<T> = Result<T, AppError>;
