//! # regioncart-core: Pure Business Logic for RegionCart
//!
//! Cart bookkeeping and finance derivation for a catalog priced per region.
//! Every function here is deterministic and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RegionCart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (CLI / web)                        │   │
//! │  │    Catalog list ──► Cart editor ──► Summary panel               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 regioncart-store (persisted)                    │   │
//! │  │    CartStore, BalanceStore, RegionStore, PreferencesStore       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ regioncart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ breakdown │  │  finance  │  │   │
//! │  │   │ ShopItem  │  │ CartState │  │ CartLine  │  │  Summary  │  │   │
//! │  │   │  Region   │  │ sanitize  │  │   join    │  │   fold    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog model (ShopItem, Region, RegionPrices)
//! - [`cart`] - CartState and the sanitizer for untrusted input
//! - [`breakdown`] - Cart × catalog × region → sorted lines
//! - [`finance`] - Lines × balance → summary
//! - [`catalog`] - Listing filters and price ordering
//! - [`price`] - Price normalization and display
//! - [`validation`] - Number coercion and clamping helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use regioncart_core::{build_cart_breakdown, summarize_finance};
//! use regioncart_core::{CartState, Region, RegionPrices, ShopItem};
//!
//! let catalog = vec![
//!     ShopItem::new(1, "Sticker").with_prices(RegionPrices::default().with(Region::Us, 10.0)),
//!     ShopItem::new(2, "Poster").with_prices(RegionPrices::default().with(Region::Us, 5.0)),
//! ];
//!
//! let mut cart = CartState::new();
//! cart.set_count(1, 2.0);
//! cart.increment(2, 1.0);
//!
//! let lines = build_cart_breakdown(&catalog, &cart, Region::Us);
//! let summary = summarize_finance(&lines, Some(30.0));
//!
//! assert_eq!(summary.total_items, 3);
//! assert_eq!(summary.total_cost, 25.0);
//! assert_eq!(summary.remaining_balance, 5.0);
//! assert!(!summary.over_budget);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod finance;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakdown::{build_cart_breakdown, CartLine};
pub use cart::{sanitize, CartState};
pub use catalog::CatalogFilter;
pub use error::{CoreError, CoreResult, ValidationError};
pub use finance::{summarize_finance, FinanceSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key of the persisted cart record.
pub const CART_STORAGE_KEY: &str = "cart";

/// Storage key of the persisted balance.
pub const BALANCE_STORAGE_KEY: &str = "balance";

/// Storage key of the persisted region selection.
pub const REGION_STORAGE_KEY: &str = "region";

/// Storage key of the persisted display preferences.
pub const PREFERENCES_STORAGE_KEY: &str = "config";
