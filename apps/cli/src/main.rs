//! # RegionCart CLI Entry Point
//!
//! ```text
//! regioncart cart add 12 --by 2
//! regioncart region set EU
//! regioncart balance set 1500
//! regioncart summary
//! ```

use clap::Parser;
use regioncart_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    regioncart_cli::init_tracing(cli.verbose);

    if let Err(e) = regioncart_cli::run(cli).await {
        eprintln!("error[{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}
