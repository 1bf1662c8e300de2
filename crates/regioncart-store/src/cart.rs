//! # Cart Store
//!
//! Single source of truth for quantities per item, persisted on every change.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Caller                     CartStore                 Storage ("cart") │
//! │  ──────                     ─────────                 ──────────────── │
//! │                                                                         │
//! │  set_item_count(id, n) ───► CartState::set_count ──┐                   │
//! │  increment_item_count() ──► CartState::increment ──┤                   │
//! │  clear() ─────────────────► CartState::clear ──────┤                   │
//! │                                                    ▼                   │
//! │                                        sanitize → empty? remove key    │
//! │                                                   else  write JSON     │
//! │                                                    │                   │
//! │                                                    ▼                   │
//! │                                        observers (subscription order)  │
//! │                                                                         │
//! │  A zero or non-finite increment stops before any of this.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Corrupt records are logged and removed; storage errors are logged and the
//! store keeps working in memory. No operation here returns an error.

use std::sync::Arc;

use regioncart_core::{CartState, ItemId, CART_STORAGE_KEY};
use tracing::{debug, error, warn};

use crate::storage::Storage;
use crate::writable::{SubscriptionId, Writable};

/// Persisted cart.
pub struct CartStore {
    state: Writable<CartState>,
    storage: Arc<dyn Storage>,
}

impl CartStore {
    /// Restores the cart from `storage`.
    ///
    /// The sanitized result is written straight back, so a hand-edited
    /// record is normalized (or removed) on start.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let initial = load_cart(storage.as_ref());
        persist_cart(storage.as_ref(), &initial);

        CartStore {
            state: Writable::new(initial),
            storage,
        }
    }

    /// Current mapping.
    pub fn state(&self) -> &CartState {
        self.state.get()
    }

    /// Quantity of `item_id` (0 when absent).
    pub fn count(&self, item_id: ItemId) -> u32 {
        self.state.get().count(item_id)
    }

    /// Sets the quantity of `item_id`; invalid or zero counts remove it.
    pub fn set_item_count(&mut self, item_id: ItemId, count: f64) {
        debug!(item_id, count, "set_item_count");
        let mut next = self.state.get().clone();
        next.set_count(item_id, count);
        self.commit(next);
    }

    /// Adds `delta` to the quantity of `item_id`.
    ///
    /// A zero or non-finite `delta` changes nothing and writes nothing.
    pub fn increment_item_count(&mut self, item_id: ItemId, delta: f64) {
        let mut next = self.state.get().clone();
        if !next.increment(item_id, delta) {
            debug!(item_id, delta, "increment ignored");
            return;
        }
        debug!(item_id, delta, count = next.count(item_id), "increment_item_count");
        self.commit(next);
    }

    /// Drops `item_id` from the cart. Writes nothing when it was not there.
    pub fn remove_item(&mut self, item_id: ItemId) {
        if !self.state.get().contains(item_id) {
            return;
        }
        debug!(item_id, "remove_item");
        let mut next = self.state.get().clone();
        next.remove(item_id);
        self.commit(next);
    }

    /// [`increment_item_count`](Self::increment_item_count) by one.
    pub fn add_one(&mut self, item_id: ItemId) {
        self.increment_item_count(item_id, 1.0);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        debug!("clear cart");
        self.commit(CartState::new());
    }

    /// Observes every committed cart; called immediately with the current one.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&CartState) + Send + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    fn commit(&mut self, next: CartState) {
        persist_cart(self.storage.as_ref(), &next);
        self.state.set(next);
    }
}

/// Reads the persisted cart, recovering to empty on any problem.
pub fn load_cart(storage: &dyn Storage) -> CartState {
    let stored = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return CartState::new(),
        Err(e) => {
            warn!(error = %e, "cart storage unreadable, starting empty");
            return CartState::new();
        }
    };

    if stored.is_empty() {
        return CartState::new();
    }

    match serde_json::from_str::<serde_json::Value>(&stored) {
        Ok(raw) => regioncart_core::sanitize(&raw),
        Err(e) => {
            error!(error = %e, "failed to parse persisted cart, discarding it");
            if let Err(e) = storage.remove(CART_STORAGE_KEY) {
                warn!(error = %e, "could not remove corrupt cart record");
            }
            CartState::new()
        }
    }
}

/// Writes the sanitized cart, or removes the record when it is empty.
pub fn persist_cart(storage: &dyn Storage, state: &CartState) {
    let sanitized = state.sanitized();

    let result = if sanitized.is_empty() {
        storage.remove(CART_STORAGE_KEY)
    } else {
        match serde_json::to_string(&sanitized) {
            Ok(json) => storage.set(CART_STORAGE_KEY, &json),
            Err(e) => Err(e.into()),
        }
    };

    if let Err(e) = result {
        warn!(error = %e, "failed to persist cart");
    }
}
