//! # Catalog Source
//!
//! Retrieves the item catalog, either from the HTTP endpoint or from a local
//! JSON file (offline use, fixtures).
//!
//! Failures here are the caller's concern: the cart logic itself only ever
//! sees a (possibly empty) list of items.

use std::path::PathBuf;
use std::time::Duration;

use regioncart_core::types::decode_catalog;
use regioncart_core::ShopItem;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

const USER_AGENT: &str = concat!("regioncart/", env!("CARGO_PKG_VERSION"));

/// Where the catalog comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Http { client: Client, url: Url },
    File(PathBuf),
}

impl CatalogSource {
    /// HTTP source with a request timeout.
    pub fn http(url: &str, timeout: Duration) -> AppResult<Self> {
        let url = Url::parse(url)
            .map_err(|e| AppError::config(format!("invalid catalog URL '{url}': {e}")))?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(CatalogSource::Http { client, url })
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        CatalogSource::File(path.into())
    }

    /// Downloads or reads and decodes the catalog.
    pub async fn fetch(&self) -> AppResult<Vec<ShopItem>> {
        let body = match self {
            CatalogSource::Http { client, url } => {
                debug!(%url, "fetching catalog");
                client
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
            CatalogSource::File(path) => {
                debug!(path = %path.display(), "reading catalog file");
                tokio::fs::read_to_string(path).await?
            }
        };

        let decoded = decode_catalog(&body)?;
        if decoded.skipped > 0 {
            warn!(skipped = decoded.skipped, "ignored malformed catalog entries");
        }
        info!(items = decoded.items.len(), "catalog loaded");
        Ok(decoded.items)
    }
}
