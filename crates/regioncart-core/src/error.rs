//! # Error Types
//!
//! Domain-specific error types for regioncart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  regioncart-core errors (this file)                                    │
//! │  ├── CoreError        - Catalog decoding and strict parsing            │
//! │  └── ValidationError  - Rejected input values                          │
//! │                                                                         │
//! │  regioncart-store errors (separate crate)                              │
//! │  └── StoreError       - Storage backend failures                       │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Do NOT Appear
//! The cart operations, the breakdown builder and the finance summary never
//! fail. Bad counts are clamped, unknown items are skipped, missing prices
//! mean "unavailable". Errors only come out of the *strict* entry points
//! (`Region::from_str`, [`crate::types::parse_catalog`]).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog payload could not be decoded.
    ///
    /// ## When This Occurs
    /// - Catalog endpoint returned HTML or an error page
    /// - The payload is valid JSON but not an array
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Value is not a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
