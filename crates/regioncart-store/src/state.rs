//! # Application State
//!
//! Bundles the four stores over one storage medium and derives the cart
//! breakdown and finance summary from them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState::load(storage)                                                │
//! │                                                                         │
//! │  ┌────────────┐ ┌──────────────┐ ┌─────────────┐ ┌──────────────────┐  │
//! │  │ CartStore  │ │ BalanceStore │ │ RegionStore │ │ PreferencesStore │  │
//! │  │  "cart"    │ │  "balance"   │ │  "region"   │ │   "config"       │  │
//! │  └─────┬──────┘ └──────┬───────┘ └──────┬──────┘ └──────────────────┘  │
//! │        │               │                │                               │
//! │        └───────┬───────┴────────────────┘                               │
//! │                ▼                                                        │
//! │   summarize(catalog) → (Vec<CartLine>, FinanceSummary)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Constructed once and handed to whatever needs it; there is no global.

use std::sync::Arc;

use regioncart_core::{build_cart_breakdown, summarize_finance, CartLine, FinanceSummary, ShopItem};

use crate::balance::BalanceStore;
use crate::cart::CartStore;
use crate::preferences::PreferencesStore;
use crate::region::RegionStore;
use crate::storage::Storage;

/// All persisted client state.
pub struct AppState {
    pub cart: CartStore,
    pub balance: BalanceStore,
    pub region: RegionStore,
    pub preferences: PreferencesStore,
}

impl AppState {
    /// Loads every store from `storage`.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        AppState {
            cart: CartStore::load(Arc::clone(&storage)),
            balance: BalanceStore::load(Arc::clone(&storage)),
            region: RegionStore::load(Arc::clone(&storage)),
            preferences: PreferencesStore::load(storage),
        }
    }

    /// Cart lines for the selected region.
    pub fn breakdown(&self, catalog: &[ShopItem]) -> Vec<CartLine> {
        build_cart_breakdown(catalog, self.cart.state(), self.region.get())
    }

    /// Cart lines plus the summary against the current balance.
    pub fn summarize(&self, catalog: &[ShopItem]) -> (Vec<CartLine>, FinanceSummary) {
        let lines = self.breakdown(catalog);
        let summary = summarize_finance(&lines, Some(self.balance.get()));
        (lines, summary)
    }
}
