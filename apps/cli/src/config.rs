//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --catalog-url, --data-dir                                          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     REGIONCART_CATALOG_URL, REGIONCART_DATA_DIR,                       │
//! │     REGIONCART_TIMEOUT_SECS                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     $REGIONCART_CONFIG, or <platform config dir>/config.toml           │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! catalog_url = "https://summer.skyfall.dev/api/shop"
//! data_dir = "/home/me/.regioncart"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://summer.skyfall.dev/api/shop";

/// Default request timeout for the catalog fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_CONFIG: &str = "REGIONCART_CONFIG";
const ENV_CATALOG_URL: &str = "REGIONCART_CATALOG_URL";
const ENV_DATA_DIR: &str = "REGIONCART_DATA_DIR";
const ENV_TIMEOUT_SECS: &str = "REGIONCART_TIMEOUT_SECS";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub catalog_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the catalog is downloaded from.
    pub catalog_url: String,
    /// Directory for persisted records; `None` means the platform default.
    pub data_dir: Option<PathBuf>,
    /// Catalog request timeout.
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            data_dir: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Loads the config file (if any) and applies environment overrides.
    ///
    /// ## Errors
    /// A config file that exists but cannot be read or parsed. A missing
    /// file is fine.
    pub fn load() -> AppResult<Self> {
        let path = std::env::var_os(ENV_CONFIG)
            .map(PathBuf::from)
            .or_else(default_config_path);

        let file = match path {
            Some(path) => read_file_config(&path)?,
            None => None,
        };

        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merges defaults, file values and environment values.
    ///
    /// `env` is a lookup so tests need not touch the process environment.
    pub fn from_sources(file: Option<FileConfig>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(file) = file {
            if let Some(url) = file.catalog_url {
                config.catalog_url = url;
            }
            if let Some(dir) = file.data_dir {
                config.data_dir = Some(dir);
            }
            if let Some(secs) = file.timeout_secs {
                config.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(url) = env(ENV_CATALOG_URL).filter(|u| !u.trim().is_empty()) {
            config.catalog_url = url;
        }
        if let Some(dir) = env(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = env(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid timeout override"),
            }
        }

        config
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "regioncart", "regioncart")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Reads `path`; `Ok(None)` when the file does not exist.
pub fn read_file_config(path: &Path) -> AppResult<Option<FileConfig>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file");
            return Ok(None);
        }
        Err(e) => {
            return Err(AppError::config(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    toml::from_str(&text)
        .map(Some)
        .map_err(|e| AppError::config(format!("invalid {}: {}", path.display(), e)))
}
