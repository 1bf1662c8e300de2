//! `regioncart catalog`: filtered listing priced in the selected region.

use std::io::Write;

use regioncart_core::catalog::{filter_items, sort_by_price};
use regioncart_core::price::format_amount;
use regioncart_core::{ItemId, ShopItem, ShopType};
use regioncart_store::{AppState, PreferencesPatch};
use serde::Serialize;
use tracing::debug;

use super::write_json;
use crate::cli::CatalogArgs;
use crate::error::AppResult;

/// One listing row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: ItemId,
    pub title: String,
    pub shop_type: ShopType,
    /// `None` when the item is not sold in the region.
    pub price: Option<f64>,
    pub in_cart: u32,
}

/// Lists `items` through the stored filter, with `args` taking precedence.
pub fn run(
    state: &mut AppState,
    items: &[ShopItem],
    args: CatalogArgs,
    out: &mut impl Write,
) -> AppResult<()> {
    let mut filter = state.preferences.get().catalog_filter();
    if let Some(query) = args.query {
        filter.query = query;
    }
    if args.black_market {
        filter.show_black_market = true;
    }

    if args.save {
        state.preferences.update(PreferencesPatch {
            show_black_market: Some(filter.show_black_market),
            search_query: Some(filter.query.clone()),
            ..Default::default()
        });
    }

    let region = state.region.get();
    let mut listed = filter_items(items, &filter);
    sort_by_price(&mut listed, region);
    debug!(shown = listed.len(), total = items.len(), %region, "catalog listing");

    let entries: Vec<CatalogEntry> = listed
        .into_iter()
        .map(|item| CatalogEntry {
            id: item.id,
            title: item.title.clone(),
            shop_type: item.shop_type,
            price: item.price(region),
            in_cart: state.cart.count(item.id),
        })
        .collect();

    if args.json {
        return write_json(out, &entries);
    }

    if entries.is_empty() {
        writeln!(out, "No items match.")?;
        return Ok(());
    }

    let show_badges = state.preferences.get().show_badges;
    writeln!(out, "{} item(s), prices in {}", entries.len(), region)?;
    for entry in &entries {
        let price = entry
            .price
            .map(format_amount)
            .unwrap_or_else(|| "n/a".to_string());
        write!(out, "{:>8}  {:>8}  {}", entry.id, price, entry.title)?;
        if show_badges && entry.shop_type == ShopType::BlackMarket {
            write!(out, "  [black market]")?;
        }
        if entry.in_cart > 0 {
            write!(out, "  (x{} in cart)", entry.in_cart)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
