//! # Finance Summary
//!
//! Folds a breakdown and a balance into the figures the UI shows.
//!
//! ## Over-Budget Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  balance ≤ 0           → budget tracking disabled → overBudget = false │
//! │  balance > 0           → overBudget = totalCost > balance              │
//! │                                                                         │
//! │  balance 100, cost 100     → false                                     │
//! │  balance 100, cost 100.01  → true                                      │
//! │  balance 0,   cost 50      → false                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! `remaining_balance` is never clamped and goes negative when overspent.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::breakdown::CartLine;
use crate::validation::finite_or_zero;

/// Aggregate figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FinanceSummary {
    /// Sum of line counts.
    #[ts(type = "number")]
    pub total_items: u64,
    /// Sum of line totals.
    pub total_cost: f64,
    /// The balance used; `0` when the supplied one was not finite.
    pub balance: f64,
    /// `balance - total_cost`
    pub remaining_balance: f64,
    pub over_budget: bool,
}

/// Summarizes `breakdown` against `balance`.
///
/// A missing or non-finite balance is treated as `0`.
///
/// ## Example
/// ```rust
/// use regioncart_core::finance::summarize_finance;
///
/// let summary = summarize_finance(&[], Some(25.0));
/// assert_eq!(summary.remaining_balance, 25.0);
/// assert!(!summary.over_budget);
/// ```
pub fn summarize_finance(breakdown: &[CartLine], balance: Option<f64>) -> FinanceSummary {
    let (total_items, total_cost) = breakdown
        .iter()
        .fold((0u64, 0.0f64), |(items, cost), line| {
            (items + u64::from(line.count), cost + line.total)
        });

    let balance = balance.map(finite_or_zero).unwrap_or(0.0);

    FinanceSummary {
        total_items,
        total_cost,
        balance,
        remaining_balance: balance - total_cost,
        over_budget: balance > 0.0 && total_cost > balance,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShopItem;

    fn line(count: u32, total: f64) -> CartLine {
        CartLine {
            item: ShopItem::new(1, "Line"),
            count,
            unit_price: total / f64::from(count),
            total,
        }
    }

    #[test]
    fn test_summary_arithmetic() {
        let summary = summarize_finance(&[line(2, 20.0), line(1, 5.0)], Some(30.0));
        assert_eq!(
            summary,
            FinanceSummary {
                total_items: 3,
                total_cost: 25.0,
                balance: 30.0,
                remaining_balance: 5.0,
                over_budget: false,
            }
        );
    }

    #[test]
    fn test_over_budget_boundary() {
        assert!(!summarize_finance(&[line(1, 100.0)], Some(100.0)).over_budget);
        assert!(summarize_finance(&[line(1, 100.01)], Some(100.0)).over_budget);
    }

    #[test]
    fn test_non_positive_balance_never_over_budget() {
        let zero = summarize_finance(&[line(1, 50.0)], Some(0.0));
        assert!(!zero.over_budget);
        assert_eq!(zero.remaining_balance, -50.0);

        let negative = summarize_finance(&[line(1, 50.0)], Some(-10.0));
        assert!(!negative.over_budget);
        assert_eq!(negative.remaining_balance, -60.0);
    }

    #[test]
    fn test_invalid_balance_is_zero() {
        for balance in [None, Some(f64::NAN), Some(f64::INFINITY)] {
            let summary = summarize_finance(&[line(1, 5.0)], balance);
            assert_eq!(summary.balance, 0.0);
            assert_eq!(summary.remaining_balance, -5.0);
            assert!(!summary.over_budget);
        }
    }

    #[test]
    fn test_empty_breakdown() {
        let summary = summarize_finance(&[], Some(12.0));
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.remaining_balance, 12.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(summarize_finance(&[], Some(1.0))).unwrap();
        for key in ["totalItems", "totalCost", "balance", "remainingBalance", "overBudget"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
