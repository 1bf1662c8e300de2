//! # Catalog Filtering
//!
//! Search and ordering over the fetched catalog, for listing screens.

use serde::{Deserialize, Serialize};

use crate::breakdown::compare_titles;
use crate::price::normalize_price;
use crate::types::{Region, ShopItem, ShopType};

/// What the listing should show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Case-insensitive substring matched against title and description.
    pub query: String,
    /// Include black-market items.
    pub show_black_market: bool,
}

impl CatalogFilter {
    /// Returns true when `item` passes the filter.
    pub fn matches(&self, item: &ShopItem) -> bool {
        if item.shop_type == ShopType::BlackMarket && !self.show_black_market {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || item.title.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query)
    }
}

/// Keeps the items that pass `filter`, in catalog order.
pub fn filter_items<'a>(items: &'a [ShopItem], filter: &CatalogFilter) -> Vec<&'a ShopItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Sorts by price in `region`, cheapest first, unavailable last.
///
/// Equal prices fall back to title order.
pub fn sort_by_price(items: &mut [&ShopItem], region: Region) {
    items.sort_by(|a, b| {
        normalize_price(a.price(region))
            .total_cmp(&normalize_price(b.price(region)))
            .then_with(|| compare_titles(&a.title, &b.title))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionPrices;

    fn catalog() -> Vec<ShopItem> {
        let mut hoodie = ShopItem::new(1, "Hoodie")
            .with_prices(RegionPrices::default().with(Region::Us, 40.0));
        hoodie.description = "Warm and soft".to_string();

        let mut crate_item = ShopItem::new(2, "Loot Crate")
            .with_prices(RegionPrices::default().with(Region::Us, 15.0));
        crate_item.shop_type = ShopType::BlackMarket;

        let socks = ShopItem::new(3, "Socks")
            .with_prices(RegionPrices::default().with(Region::Eu, 5.0));

        let beanie = ShopItem::new(4, "Beanie")
            .with_prices(RegionPrices::default().with(Region::Us, 15.0));

        vec![hoodie, crate_item, socks, beanie]
    }

    #[test]
    fn test_black_market_hidden_by_default() {
        let items = catalog();
        let ids: Vec<_> = filter_items(&items, &CatalogFilter::default())
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);

        let filter = CatalogFilter {
            show_black_market: true,
            ..Default::default()
        };
        assert_eq!(filter_items(&items, &filter).len(), 4);
    }

    #[test]
    fn test_query_matches_title_and_description() {
        let items = catalog();
        let filter = CatalogFilter {
            query: "  SOFT ".to_string(),
            ..Default::default()
        };
        let found = filter_items(&items, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let filter = CatalogFilter {
            query: "sock".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_items(&items, &filter)[0].id, 3);
    }

    #[test]
    fn test_sort_by_price() {
        let items = catalog();
        let filter = CatalogFilter {
            show_black_market: true,
            ..Default::default()
        };
        let mut listed = filter_items(&items, &filter);
        sort_by_price(&mut listed, Region::Us);

        let ids: Vec<_> = listed.iter().map(|i| i.id).collect();
        // Beanie and Loot Crate tie at 15; Socks has no US price
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }
}
