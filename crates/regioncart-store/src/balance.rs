//! # Balance Store
//!
//! The user's spending balance, persisted as plain number text.
//!
//! ## Rules
//! - A stored balance must be a finite number ≥ 0; anything else is
//!   discarded and the balance starts at 0.
//! - `set_balance` ignores negative and non-finite values.
//! - `adjust_balance` never takes the balance below 0.

use std::sync::Arc;

use regioncart_core::validation::parse_number;
use regioncart_core::BALANCE_STORAGE_KEY;
use tracing::{debug, warn};

use crate::storage::Storage;
use crate::writable::{SubscriptionId, Writable};

/// Persisted balance.
pub struct BalanceStore {
    balance: Writable<f64>,
    storage: Arc<dyn Storage>,
}

impl BalanceStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let initial = load_balance(storage.as_ref());
        BalanceStore {
            balance: Writable::new(initial),
            storage,
        }
    }

    /// Current balance.
    pub fn get(&self) -> f64 {
        *self.balance.get()
    }

    /// Replaces the balance. Returns false (and changes nothing) when
    /// `value` is negative or not finite.
    pub fn set_balance(&mut self, value: f64) -> bool {
        if !value.is_finite() || value < 0.0 {
            debug!(value, "rejected balance");
            return false;
        }
        self.commit(value);
        true
    }

    /// Adds `amount` (may be negative), clamping the result at 0.
    ///
    /// A non-finite amount is ignored.
    pub fn adjust_balance(&mut self, amount: f64) {
        if !amount.is_finite() {
            debug!(amount, "ignored balance adjustment");
            return;
        }
        let next = (self.get() + amount).max(0.0);
        self.commit(next);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&f64) + Send + 'static) -> SubscriptionId {
        self.balance.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.balance.unsubscribe(id)
    }

    fn commit(&mut self, value: f64) {
        if let Err(e) = self.storage.set(BALANCE_STORAGE_KEY, &value.to_string()) {
            warn!(error = %e, "failed to persist balance");
        }
        self.balance.set(value);
    }
}

fn load_balance(storage: &dyn Storage) -> f64 {
    let stored = match storage.get(BALANCE_STORAGE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return 0.0,
        Err(e) => {
            warn!(error = %e, "balance storage unreadable, using 0");
            return 0.0;
        }
    };

    let value = parse_number(&stored);
    if value.is_finite() && value >= 0.0 && !stored.trim().is_empty() {
        return value;
    }

    warn!(stored = %stored, "discarding invalid persisted balance");
    if let Err(e) = storage.remove(BALANCE_STORAGE_KEY) {
        warn!(error = %e, "could not remove invalid balance record");
    }
    0.0
}
