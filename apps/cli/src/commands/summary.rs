//! `regioncart summary`: cart breakdown and totals for the selected region.

use std::io::Write;

use regioncart_core::price::format_amount;
use regioncart_core::{CartLine, FinanceSummary, Region, ShopItem};
use regioncart_store::AppState;
use serde::Serialize;

use super::{signed_amount, write_json};
use crate::cli::SummaryArgs;
use crate::error::AppResult;

/// JSON shape of the summary output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub region: Region,
    pub lines: Vec<CartLine>,
    pub summary: FinanceSummary,
    /// Cart entries with no price in `region` (or missing from the catalog).
    pub unpriced: usize,
}

impl SummaryResponse {
    pub fn from_state(state: &AppState, catalog: &[ShopItem]) -> Self {
        let (lines, summary) = state.summarize(catalog);
        let unpriced = state.cart.state().len().saturating_sub(lines.len());
        SummaryResponse {
            region: state.region.get(),
            lines,
            summary,
            unpriced,
        }
    }
}

pub fn run(
    state: &AppState,
    catalog: &[ShopItem],
    args: SummaryArgs,
    out: &mut impl Write,
) -> AppResult<()> {
    let response = SummaryResponse::from_state(state, catalog);
    if args.json {
        return write_json(out, &response);
    }
    render(&response, out)
}

fn render(response: &SummaryResponse, out: &mut impl Write) -> AppResult<()> {
    writeln!(out, "Region: {}", response.region)?;

    if response.lines.is_empty() {
        writeln!(out, "  (no priced items in cart)")?;
    }
    for line in &response.lines {
        writeln!(
            out,
            "  {} x {} @ {} = {}",
            line.count,
            line.item.title,
            format_amount(line.unit_price),
            format_amount(line.total)
        )?;
    }
    if response.unpriced > 0 {
        writeln!(
            out,
            "  ({} cart item(s) not available in {})",
            response.unpriced, response.region
        )?;
    }

    let summary = &response.summary;
    writeln!(out, "Items:     {}", summary.total_items)?;
    writeln!(out, "Total:     {}", format_amount(summary.total_cost))?;
    writeln!(out, "Balance:   {}", format_amount(summary.balance))?;
    writeln!(out, "Remaining: {}", signed_amount(summary.remaining_balance))?;
    if summary.over_budget {
        writeln!(out, "OVER BUDGET")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regioncart_core::RegionPrices;
    use regioncart_store::MemoryStorage;
    use std::sync::Arc;

    fn catalog() -> Vec<ShopItem> {
        vec![
            ShopItem::new(1, "Tote Bag").with_prices(
                RegionPrices::default()
                    .with(Region::Us, 1200.0)
                    .with(Region::In, 900.0),
            ),
            ShopItem::new(2, "enamel pin").with_prices(RegionPrices::default().with(Region::Us, 150.0)),
        ]
    }

    fn summary_text(state: &AppState) -> String {
        let mut out = Vec::new();
        run(state, &catalog(), SummaryArgs::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_over_budget_text() {
        let mut state = AppState::load(Arc::new(MemoryStorage::new()));
        state.cart.set_item_count(1, 1.0);
        state.cart.set_item_count(2, 2.0);
        state.cart.set_item_count(99, 1.0);
        state.balance.set_balance(1000.0);

        assert_eq!(
            summary_text(&state),
            "Region: US\n\
             \x20 2 x enamel pin @ 150 = 300\n\
             \x20 1 x Tote Bag @ 1,200 = 1,200\n\
             \x20 (1 cart item(s) not available in US)\n\
             Items:     3\n\
             Total:     1,500\n\
             Balance:   1,000\n\
             Remaining: -500\n\
             OVER BUDGET\n"
        );
    }

    #[test]
    fn test_zero_balance_is_never_over_budget() {
        let mut state = AppState::load(Arc::new(MemoryStorage::new()));
        state.cart.set_item_count(1, 3.0);

        let response = SummaryResponse::from_state(&state, &catalog());
        assert_eq!(response.summary.total_cost, 3600.0);
        assert_eq!(response.summary.remaining_balance, -3600.0);
        assert!(!response.summary.over_budget);
        assert!(!summary_text(&state).contains("OVER BUDGET"));
    }

    #[test]
    fn test_json_output() {
        let mut state = AppState::load(Arc::new(MemoryStorage::new()));
        state.region.set(Region::In);
        state.cart.set_item_count(1, 2.0);
        state.cart.set_item_count(2, 1.0);
        state.balance.set_balance(5000.0);

        let mut out = Vec::new();
        run(&state, &catalog(), SummaryArgs { json: true }, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["region"], "IN");
        assert_eq!(value["unpriced"], 1);
        assert_eq!(value["lines"].as_array().unwrap().len(), 1);
        assert_eq!(value["lines"][0]["unitPrice"], 900.0);
        assert_eq!(value["lines"][0]["total"], 1800.0);
        assert_eq!(value["summary"]["totalItems"], 2);
        assert_eq!(value["summary"]["remainingBalance"], 3200.0);
        assert_eq!(value["summary"]["overBudget"], false);
    }

    #[test]
    fn test_empty_cart() {
        let state = AppState::load(Arc::new(MemoryStorage::new()));
        let text = summary_text(&state);
        assert!(text.starts_with("Region: US\n  (no priced items in cart)\n"));
        assert!(text.contains("Remaining: 0\n"));
    }
}
