//! # regioncart-store: Persisted State for RegionCart
//!
//! Synchronous, observable state holders over an injected storage medium.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RegionCart Data Flow                             │
//! │                                                                         │
//! │  CLI command (cart add 12)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 regioncart-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Writable    │    │    Stores     │    │   Storage    │  │   │
//! │  │   │ (writable.rs) │◄───│ CartStore     │───►│ FileStorage  │  │   │
//! │  │   │ value +       │    │ BalanceStore  │    │ MemoryStorage│  │   │
//! │  │   │ observers     │    │ RegionStore   │    │ NoopStorage  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  regioncart-core (sanitize, breakdown, finance)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use regioncart_store::{AppState, MemoryStorage};
//!
//! let mut state = AppState::load(Arc::new(MemoryStorage::new()));
//! state.cart.set_item_count(12, 2.0);
//! state.cart.increment_item_count(12, -5.0);
//! assert!(state.cart.state().is_empty());
//! ```

pub mod balance;
pub mod cart;
pub mod error;
pub mod preferences;
pub mod region;
pub mod state;
pub mod storage;
pub mod writable;

pub use balance::BalanceStore;
pub use cart::CartStore;
pub use error::{StoreError, StoreResult};
pub use preferences::{Preferences, PreferencesPatch, PreferencesStore};
pub use region::{RegionStore, REGION_OPTIONS};
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, NoopStorage, Storage};
pub use writable::{SubscriptionId, Writable};
