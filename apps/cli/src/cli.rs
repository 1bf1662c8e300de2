//! # Command-Line Interface
//!
//! ```text
//! regioncart [--data-dir DIR] [--catalog-url URL | --catalog-file FILE] [-v]
//!   cart     show | set <id> <count> | add <id> [--by N] | remove <id> | clear
//!   balance  show | set <value> | adjust <delta>
//!   region   show | set <code> | list
//!   catalog  [--query Q] [--black-market] [--save] [--json]
//!   summary  [--json]
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use regioncart_core::ItemId;

#[derive(Debug, Parser)]
#[command(name = "regioncart", version, about = "Region-priced shop cart and budget tracker")]
pub struct Cli {
    /// Directory holding the persisted cart, balance and preferences
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Catalog endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Read the catalog from a local JSON file instead of the endpoint
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "catalog_url")]
    pub catalog_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or change cart quantities
    #[command(subcommand)]
    Cart(CartCommand),

    /// Inspect or change the available balance
    #[command(subcommand)]
    Balance(BalanceCommand),

    /// Inspect or change the pricing region
    #[command(subcommand)]
    Region(RegionCommand),

    /// List catalog items with prices in the selected region
    Catalog(CatalogArgs),

    /// Cart lines and totals against the balance
    Summary(SummaryArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Print the stored quantities
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Set the quantity of an item (0 or less removes it)
    #[command(allow_negative_numbers = true)]
    Set { item_id: ItemId, count: f64 },

    /// Add to the quantity of an item
    #[command(allow_negative_numbers = true)]
    Add {
        item_id: ItemId,
        #[arg(long, default_value_t = 1.0, value_name = "DELTA")]
        by: f64,
    },

    /// Remove an item
    #[command(allow_negative_numbers = true)]
    Remove { item_id: ItemId },

    /// Empty the cart
    Clear,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BalanceCommand {
    Show,

    /// Replace the balance
    Set { value: f64 },

    /// Add to (or subtract from) the balance
    #[command(allow_negative_numbers = true)]
    Adjust { delta: f64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum RegionCommand {
    Show,

    /// Select a region by code (US, EU, IN, CA, AU, XX)
    Set { code: String },

    /// List the selectable regions
    List,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// Only items whose title or description contains this text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Include black-market items
    #[arg(long)]
    pub black_market: bool,

    /// Remember --query and --black-market for later listings
    #[arg(long)]
    pub save: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SummaryArgs {
    #[arg(long)]
    pub json: bool,
}
