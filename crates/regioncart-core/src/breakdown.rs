//! # Cart Breakdown
//!
//! Joins the cart against the catalog for one region.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog (Vec<ShopItem>) ──┐                                            │
//! │                            │                                            │
//! │  cart (CartState) ─────────┼──► build_cart_breakdown() ──► Vec<CartLine>│
//! │                            │      • catalog-driven join                 │
//! │  region ───────────────────┘      • skip count 0 / unknown ids          │
//! │                                   • skip unavailable prices             │
//! │                                   • sort by title                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::types::{Region, ShopItem};

/// One purchasable row of the cart.
///
/// Derived on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub item: ShopItem,
    pub count: u32,
    pub unit_price: f64,
    /// `unit_price * count`
    pub total: f64,
}

impl CartLine {
    /// Creates a line, computing its total.
    pub fn new(item: ShopItem, count: u32, unit_price: f64) -> Self {
        CartLine {
            total: unit_price * f64::from(count),
            item,
            count,
            unit_price,
        }
    }
}

/// Builds the sorted line-item breakdown of `cart` in `region`.
///
/// ## Rules
/// - Items are visited in catalog order; ids in the cart that the catalog
///   does not know contribute nothing.
/// - An item without a finite price in `region` is left out whatever its
///   quantity.
/// - The result is ordered by [`compare_titles`], ascending. The sort is
///   stable, so equal titles keep catalog order.
///
/// ## Example
/// ```rust
/// use regioncart_core::breakdown::build_cart_breakdown;
/// use regioncart_core::cart::CartState;
/// use regioncart_core::types::{Region, RegionPrices, ShopItem};
///
/// let items = vec![
///     ShopItem::new(1, "Banana").with_prices(RegionPrices::default().with(Region::Us, 2.0)),
///     ShopItem::new(2, "Apple").with_prices(RegionPrices::default().with(Region::Us, 3.0)),
/// ];
/// let cart: CartState = [(1, 1), (2, 2)].into_iter().collect();
///
/// let lines = build_cart_breakdown(&items, &cart, Region::Us);
/// assert_eq!(lines[0].item.title, "Apple");
/// assert_eq!(lines[0].total, 6.0);
/// ```
pub fn build_cart_breakdown(items: &[ShopItem], cart: &CartState, region: Region) -> Vec<CartLine> {
    let mut breakdown: Vec<CartLine> = items
        .iter()
        .filter_map(|item| {
            let count = cart.count(item.id);
            if count == 0 {
                return None;
            }
            let price = item.price(region)?;
            Some(CartLine::new(item.clone(), count, price))
        })
        .collect();

    breakdown.sort_by(|a, b| compare_titles(&a.item.title, &b.item.title));
    breakdown
}

thread_local! {
    // Root (language-neutral) CLDR collation, tertiary strength.
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&DataLocale::default(), CollatorOptions::new()).ok();
}

/// Orders titles the way a locale-aware string compare does.
///
/// Base letters decide first ("Éclair" sorts with the E's, "apple" before
/// "Banana"), then accents, then case, with lower case first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_case_compare(a, b),
    })
}

/// Case-insensitive comparison, lower case first on ties. Used only when
/// the collation data cannot be loaded.
fn fold_case_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionPrices;

    fn item(id: i64, title: &str, us: Option<f64>) -> ShopItem {
        let mut prices = RegionPrices::default();
        prices.set(Region::Us, us);
        ShopItem::new(id, title).with_prices(prices)
    }

    fn cart(entries: &[(i64, u32)]) -> CartState {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_sorted_by_title() {
        let items = vec![item(1, "Banana", Some(1.0)), item(2, "Apple", Some(1.0))];
        let lines = build_cart_breakdown(&items, &cart(&[(1, 1), (2, 1)]), Region::Us);

        let titles: Vec<_> = lines.iter().map(|l| l.item.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_unavailable_price_excluded() {
        let items = vec![
            item(1, "Hat", None),
            item(2, "Scarf", Some(f64::NAN)),
            item(3, "Mug", Some(4.0)),
        ];
        let lines = build_cart_breakdown(&items, &cart(&[(1, 5), (2, 5), (3, 2)]), Region::Us);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 3);
        assert_eq!(lines[0].count, 2);
        assert_eq!(lines[0].unit_price, 4.0);
        assert_eq!(lines[0].total, 8.0);
    }

    #[test]
    fn test_region_specific_prices() {
        let prices = RegionPrices::default()
            .with(Region::Us, 10.0)
            .with(Region::Eu, 9.0);
        let items = vec![ShopItem::new(1, "Poster").with_prices(prices)];
        let state = cart(&[(1, 3)]);

        assert_eq!(build_cart_breakdown(&items, &state, Region::Eu)[0].total, 27.0);
        assert!(build_cart_breakdown(&items, &state, Region::In).is_empty());
    }

    #[test]
    fn test_unknown_ids_and_zero_counts_skipped() {
        let items = vec![item(1, "Pin", Some(1.0)), item(2, "Cap", Some(2.0))];
        let lines = build_cart_breakdown(&items, &cart(&[(1, 1), (99, 4)]), Region::Us);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_cart_breakdown(&[], &cart(&[(1, 1)]), Region::Us).is_empty());
        let items = vec![item(1, "Pin", Some(1.0))];
        assert!(build_cart_breakdown(&items, &CartState::new(), Region::Us).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let items = vec![
            item(3, "cable", Some(1.0)),
            item(1, "Cable", Some(2.0)),
            item(2, "adapter", Some(3.0)),
        ];
        let state = cart(&[(1, 1), (2, 1), (3, 1)]);
        let first = build_cart_breakdown(&items, &state, Region::Us);
        let second = build_cart_breakdown(&items, &state, Region::Us);
        assert_eq!(first, second);

        let ids: Vec<_> = first.iter().map(|l| l.item.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_compare_titles() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("a", "A"), Ordering::Less);
        assert_eq!(compare_titles("Hat", "Hat"), Ordering::Equal);
        assert_eq!(compare_titles("Hat", "Hats"), Ordering::Less);
    }

    #[test]
    fn test_accented_titles_sort_with_base_letter() {
        let items = vec![
            item(1, "Zine", Some(4.0)),
            item(2, "Éclair Pin", Some(2.0)),
            item(3, "Fries", Some(3.0)),
        ];
        let lines = build_cart_breakdown(&items, &cart(&[(1, 1), (2, 1), (3, 1)]), Region::Us);

        let titles: Vec<_> = lines.iter().map(|l| l.item.title.as_str()).collect();
        assert_eq!(titles, vec!["Éclair Pin", "Fries", "Zine"]);

        assert_eq!(compare_titles("Dune", "Éclair"), Ordering::Less);
        assert_eq!(compare_titles("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_titles("éclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_titles("Über", "Zebra"), Ordering::Less);
    }

    #[test]
    fn test_fold_case_compare() {
        assert_eq!(fold_case_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(fold_case_compare("a", "A"), Ordering::Less);
        assert_eq!(fold_case_compare("Hat", "Hats"), Ordering::Less);
        assert_eq!(fold_case_compare("Hat", "Hat"), Ordering::Equal);
    }
}
