//! # regioncart-cli
//!
//! Command-line front end over `regioncart-store` and `regioncart-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Execution                                 │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: warn,regioncart=info (debug with --verbose)              │
//! │                                                                         │
//! │  2. Resolve Configuration ────────────────────────────────────────────► │
//! │     • flags > REGIONCART_* env > config.toml > defaults                 │
//! │                                                                         │
//! │  3. Open Storage ─────────────────────────────────────────────────────► │
//! │     • --data-dir / configured dir, else the platform data dir           │
//! │     • no usable directory: in-session only (nothing saved)              │
//! │                                                                         │
//! │  4. Load AppState (cart, balance, region, preferences)                  │
//! │                                                                         │
//! │  5. Fetch Catalog (catalog and summary only) and run the command        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use regioncart_store::{AppState, FileStorage, NoopStorage, Storage};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogSource;
use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::AppResult;

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,regioncart=debug"
    } else {
        "warn,regioncart=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs one parsed invocation, printing to stdout.
pub async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &config, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Runs `cli` against an already resolved configuration.
pub async fn execute(cli: Cli, config: &AppConfig, out: &mut impl Write) -> AppResult<()> {
    let storage = open_storage(cli.data_dir.clone().or_else(|| config.data_dir.clone()));
    let mut state = AppState::load(storage);

    match &cli.command {
        Command::Cart(command) => commands::cart::run(&mut state.cart, command.clone(), out),
        Command::Balance(command) => {
            commands::balance::run(&mut state.balance, command.clone(), out)
        }
        Command::Region(command) => commands::region::run(&mut state.region, command.clone(), out),
        Command::Catalog(args) => {
            let items = catalog_source(&cli, config)?.fetch().await?;
            commands::catalog::run(&mut state, &items, args.clone(), out)
        }
        Command::Summary(args) => {
            let items = catalog_source(&cli, config)?.fetch().await?;
            commands::summary::run(&state, &items, args.clone(), out)
        }
    }
}

/// `--catalog-file` wins, then `--catalog-url`, then the configured URL.
fn catalog_source(cli: &Cli, config: &AppConfig) -> AppResult<CatalogSource> {
    match (&cli.catalog_file, &cli.catalog_url) {
        (Some(path), _) => Ok(CatalogSource::file(path)),
        (None, Some(url)) => CatalogSource::http(url, config.timeout),
        (None, None) => CatalogSource::http(&config.catalog_url, config.timeout),
    }
}

fn open_storage(data_dir: Option<PathBuf>) -> Arc<dyn Storage> {
    if let Some(dir) = data_dir {
        debug!(dir = %dir.display(), "using data directory");
        return Arc::new(FileStorage::new(dir));
    }

    match FileStorage::in_platform_dir() {
        Ok(storage) => {
            debug!(dir = %storage.dir().display(), "using platform data directory");
            Arc::new(storage)
        }
        Err(e) => {
            warn!(error = %e, "no data directory available; changes will not be saved");
            Arc::new(NoopStorage)
        }
    }
}
