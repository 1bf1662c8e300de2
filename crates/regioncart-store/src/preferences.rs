//! # Preferences Store
//!
//! Display preferences for the catalog listing, persisted as one JSON record.
//!
//! ## Record Layout
//! ```json
//! { "showBadges": true, "showBlackMarket": false, "searchQuery": "" }
//! ```
//! Missing fields take their defaults. A record that does not decode is
//! logged, removed and replaced by the defaults.

use std::sync::Arc;

use regioncart_core::{CatalogFilter, PREFERENCES_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::StoreError;
use crate::storage::Storage;
use crate::writable::{SubscriptionId, Writable};

/// Listing preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Show price badges next to items.
    pub show_badges: bool,
    /// Include black-market items in listings.
    pub show_black_market: bool,
    /// Current search text.
    pub search_query: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            show_badges: true,
            show_black_market: false,
            search_query: String::new(),
        }
    }
}

impl Preferences {
    /// The catalog filter these preferences describe.
    pub fn catalog_filter(&self) -> CatalogFilter {
        CatalogFilter {
            query: self.search_query.clone(),
            show_black_market: self.show_black_market,
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub show_badges: Option<bool>,
    pub show_black_market: Option<bool>,
    pub search_query: Option<String>,
}

/// Persisted preferences.
pub struct PreferencesStore {
    prefs: Writable<Preferences>,
    storage: Arc<dyn Storage>,
}

impl PreferencesStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let initial = load_preferences(storage.as_ref());
        PreferencesStore {
            prefs: Writable::new(initial),
            storage,
        }
    }

    pub fn get(&self) -> &Preferences {
        self.prefs.get()
    }

    /// Merges `patch` into the current preferences and persists them.
    pub fn update(&mut self, patch: PreferencesPatch) {
        let mut next = self.prefs.get().clone();
        if let Some(show) = patch.show_badges {
            next.show_badges = show;
        }
        if let Some(show) = patch.show_black_market {
            next.show_black_market = show;
        }
        if let Some(query) = patch.search_query {
            next.search_query = query;
        }
        self.commit(next);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.update(PreferencesPatch {
            search_query: Some(query.into()),
            ..Default::default()
        });
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&Preferences) + Send + 'static,
    ) -> SubscriptionId {
        self.prefs.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.prefs.unsubscribe(id)
    }

    fn commit(&mut self, next: Preferences) {
        let result = serde_json::to_string(&next)
            .map_err(StoreError::from)
            .and_then(|json| self.storage.set(PREFERENCES_STORAGE_KEY, &json));
        if let Err(e) = result {
            warn!(error = %e, "failed to persist preferences");
        }
        self.prefs.set(next);
    }
}

fn load_preferences(storage: &dyn Storage) -> Preferences {
    let stored = match storage.get(PREFERENCES_STORAGE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Preferences::default(),
        Err(e) => {
            warn!(error = %e, "preferences storage unreadable, using defaults");
            return Preferences::default();
        }
    };

    serde_json::from_str(&stored).unwrap_or_else(|e| {
        error!(error = %e, "failed to parse persisted preferences, discarding them");
        if let Err(e) = storage.remove(PREFERENCES_STORAGE_KEY) {
            warn!(error = %e, "could not remove corrupt preferences record");
        }
        Preferences::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults() {
        let store = PreferencesStore::load(Arc::new(MemoryStorage::new()));
        assert_eq!(*store.get(), Preferences::default());
        assert!(store.get().show_badges);
        assert!(!store.get().show_black_market);
    }

    #[test]
    fn test_partial_record_merges_defaults() {
        let storage = Arc::new(MemoryStorage::with_records([(
            "config",
            r#"{"showBlackMarket": true}"#,
        )]));
        let store = PreferencesStore::load(storage);
        assert!(store.get().show_badges);
        assert!(store.get().show_black_market);
    }

    #[test]
    fn test_corrupt_record_discarded() {
        let storage = Arc::new(MemoryStorage::with_records([("config", "{{")]));
        let store = PreferencesStore::load(storage.clone());
        assert_eq!(*store.get(), Preferences::default());
        assert_eq!(storage.get("config").unwrap(), None);
    }

    #[test]
    fn test_update_merges_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = PreferencesStore::load(storage.clone());

        store.update(PreferencesPatch {
            show_badges: Some(false),
            ..Default::default()
        });
        store.set_search_query("hoodie");

        let reloaded = PreferencesStore::load(storage);
        assert!(!reloaded.get().show_badges);
        assert_eq!(reloaded.get().search_query, "hoodie");
        assert!(!reloaded.get().show_black_market);
    }

    #[test]
    fn test_catalog_filter() {
        let prefs = Preferences {
            show_black_market: true,
            search_query: "cap".to_string(),
            ..Default::default()
        };
        let filter = prefs.catalog_filter();
        assert!(filter.show_black_market);
        assert_eq!(filter.query, "cap");
    }
}
