//! # Cart State
//!
//! The item → quantity mapping and the pure rules that keep it clean.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartState                                                              │
//! │                                                                         │
//! │   key   : finite integer item id (unique)                              │
//! │   value : quantity ≥ 1                                                 │
//! │                                                                         │
//! │   A quantity that would become 0 removes the key instead.              │
//! │   Nothing ever stores { id: 0 }.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//! ```text
//! set_count(id, 2.7)      → { id: 2 }
//! set_count(id, NaN)      → id removed
//! increment(id, -1000)    → id removed (never negative)
//! increment(id, 0 | NaN)  → no-op, reported as "unchanged"
//! sanitize(untyped JSON)  → only valid entries survive
//! ```
//!
//! The persisted store in `regioncart-store` wraps these with persistence
//! and change notification; everything here is pure.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::types::ItemId;
use crate::validation::{clamp_count, coerce_number, parse_item_id};

/// Item id → quantity.
///
/// Serializes as a JSON object with id strings as keys:
/// `{"12": 3, "40": 1}`. Deserializing always goes through [`sanitize`],
/// so a `CartState` read from anywhere upholds the invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartState(#[ts(type = "Record<number, number>")] BTreeMap<ItemId, u32>);

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState(BTreeMap::new())
    }

    /// Quantity for `item_id`; `0` when not in the cart.
    pub fn count(&self, item_id: ItemId) -> u32 {
        self.0.get(&item_id).copied().unwrap_or(0)
    }

    /// Returns true when `item_id` has a positive quantity.
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.count(item_id) > 0
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.0.iter().map(|(id, count)| (*id, *count))
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.0.values().map(|count| u64::from(*count)).sum()
    }

    /// Sets the quantity of `item_id` to `max(0, floor(count))`.
    ///
    /// Non-finite counts are treated as `0`, and `0` removes the entry.
    pub fn set_count(&mut self, item_id: ItemId, count: f64) {
        self.store(item_id, clamp_count(count));
    }

    /// Adds `delta` to the current quantity (floored, clamped at 0).
    ///
    /// ## Returns
    /// `false` without touching the cart when `delta` is zero or not
    /// finite; `true` otherwise.
    pub fn increment(&mut self, item_id: ItemId, delta: f64) -> bool {
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }

        let current = f64::from(self.count(item_id));
        self.store(item_id, clamp_count(current + delta));
        true
    }

    /// Removes `item_id` from the cart.
    pub fn remove(&mut self, item_id: ItemId) {
        self.0.remove(&item_id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns a copy with every zero-quantity entry dropped.
    ///
    /// Mutations never leave zeros behind, so for any `CartState` built
    /// through this API this is an identity copy. It is still applied
    /// before every persistence write.
    pub fn sanitized(&self) -> CartState {
        self.iter().filter(|(_, count)| *count > 0).collect()
    }

    fn store(&mut self, item_id: ItemId, count: u32) {
        if count == 0 {
            self.0.remove(&item_id);
        } else {
            self.0.insert(item_id, count);
        }
    }
}

impl FromIterator<(ItemId, u32)> for CartState {
    /// Collects entries, dropping zero quantities. Later duplicates win.
    fn from_iter<I: IntoIterator<Item = (ItemId, u32)>>(iter: I) -> Self {
        let mut cart = CartState::new();
        for (id, count) in iter {
            cart.store(id, count);
        }
        cart
    }
}

impl<'de> Deserialize<'de> for CartState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(sanitize(&raw))
    }
}

/// Validates an untyped structure into a [`CartState`].
///
/// ## Rules
/// - Anything other than a JSON object yields an empty cart
/// - A key must convert to a finite integer id within the `i64` range;
///   larger integers such as `"1e20"` are dropped
/// - A value must convert to a finite number (see
///   [`coerce_number`](crate::validation::coerce_number))
/// - Quantities are floored and clamped to ≥ 0; zeros are dropped
///
/// ## Example
/// ```rust
/// use regioncart_core::cart::sanitize;
/// use serde_json::json;
///
/// let cart = sanitize(&json!({ "1": 2.8, "2": -1, "x": 5, "3": "4" }));
/// assert_eq!(cart.count(1), 2);
/// assert!(!cart.contains(2));
/// assert_eq!(cart.count(3), 4);
/// assert_eq!(cart.len(), 2);
/// ```
pub fn sanitize(raw: &Value) -> CartState {
    let Value::Object(entries) = raw else {
        return CartState::new();
    };

    entries
        .iter()
        .filter_map(|(key, value)| {
            let id = parse_item_id(key)?;
            let count = coerce_number(value);
            if !count.is_finite() {
                return None;
            }
            Some((id, clamp_count(count)))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_count_floors_and_clamps() {
        let mut cart = CartState::new();
        cart.set_count(1, 3.9);
        assert_eq!(cart.count(1), 3);

        cart.set_count(1, -2.0);
        assert!(!cart.contains(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_count_non_finite_removes() {
        let mut cart = CartState::new();
        cart.set_count(7, 2.0);
        cart.set_count(7, f64::NAN);
        assert!(!cart.contains(7));

        cart.set_count(8, f64::INFINITY);
        assert!(!cart.contains(8));
    }

    #[test]
    fn test_set_count_is_idempotent() {
        let mut once = CartState::new();
        once.set_count(4, 5.0);

        let mut twice = once.clone();
        twice.set_count(4, 5.0);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_increment() {
        let mut cart = CartState::new();
        assert!(cart.increment(2, 1.0));
        assert!(cart.increment(2, 1.0));
        assert_eq!(cart.count(2), 2);

        assert!(cart.increment(2, 0.5));
        assert_eq!(cart.count(2), 2);

        assert!(cart.increment(2, 1.5));
        assert_eq!(cart.count(2), 3);
    }

    #[test]
    fn test_increment_noop_for_zero_or_non_finite() {
        let mut cart = CartState::new();
        cart.set_count(1, 3.0);
        let before = cart.clone();

        assert!(!cart.increment(1, 0.0));
        assert!(!cart.increment(1, f64::NAN));
        assert!(!cart.increment(1, f64::NEG_INFINITY));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_never_goes_negative() {
        let mut cart = CartState::new();
        cart.set_count(9, 3.0);
        assert!(cart.increment(9, -1000.0));
        assert!(!cart.contains(9));
        assert_eq!(cart.count(9), 0);
    }

    #[test]
    fn test_net_zero_removes_key() {
        let mut cart = CartState::new();
        for delta in [1.0, 1.0, 1.0, -1.0, -1.0, -1.0] {
            cart.increment(5, delta);
        }
        assert!(cart.is_empty());
        assert_eq!(serde_json::to_string(&cart).unwrap(), "{}");
    }

    #[test]
    fn test_sanitize_filters_entries() {
        let raw = json!({
            "1": 2,
            "2": 0,
            "3": -5,
            "4": 1.7,
            "5": "3",
            "6": null,
            "7": "abc",
            "8": { "nested": true },
            "9.5": 1,
            "ten": 1,
            "11": true
        });
        let cart = sanitize(&raw);

        let entries: Vec<_> = cart.iter().collect();
        assert_eq!(entries, vec![(1, 2), (4, 1), (5, 3), (11, 1)]);
    }

    #[test]
    fn test_sanitize_non_object_is_empty() {
        assert!(sanitize(&json!(null)).is_empty());
        assert!(sanitize(&json!([1, 2, 3])).is_empty());
        assert!(sanitize(&json!("cart")).is_empty());
        assert!(sanitize(&json!(42)).is_empty());
    }

    #[test]
    fn test_sanitize_round_trip() {
        let cart = sanitize(&json!({ "3": 2, "10": 7, "-1": 1 }));
        let again = sanitize(&serde_json::to_value(&cart).unwrap());
        assert_eq!(cart, again);
        assert_eq!(cart.sanitized(), cart);
    }

    #[test]
    fn test_serialized_layout() {
        let cart: CartState = [(12, 3), (40, 1)].into_iter().collect();
        assert_eq!(serde_json::to_string(&cart).unwrap(), r#"{"12":3,"40":1}"#);
    }

    #[test]
    fn test_deserialize_sanitizes() {
        let cart: CartState = serde_json::from_str(r#"{"1": 2, "2": 0, "x": 4}"#).unwrap();
        assert_eq!(cart.iter().collect::<Vec<_>>(), vec![(1, 2)]);

        let cart: CartState = serde_json::from_str("[1, 2]").unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_sanitize_drops_ids_outside_i64() {
        let cart = sanitize(&json!({ "1e20": 1, "-1e20": 2, "9007199254740992": 3 }));
        assert_eq!(cart.iter().collect::<Vec<_>>(), vec![(9007199254740992, 3)]);
    }

    #[test]
    fn test_remove() {
        let mut cart: CartState = [(1, 2), (2, 5)].into_iter().collect();
        cart.remove(1);
        cart.remove(42);
        assert!(!cart.contains(1));
        assert_eq!(cart.iter().collect::<Vec<_>>(), vec![(2, 5)]);
    }

    #[test]
    fn test_from_iter_drops_zero() {
        let cart: CartState = [(1, 0), (2, 4)].into_iter().collect();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 4);
    }
}
