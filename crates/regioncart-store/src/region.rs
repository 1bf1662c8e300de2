//! # Region Store
//!
//! The selected pricing region, persisted as its two-letter code.

use std::sync::Arc;

use regioncart_core::{Region, REGION_STORAGE_KEY};
use tracing::{debug, warn};

use crate::storage::Storage;
use crate::writable::{SubscriptionId, Writable};

/// Regions offered for selection, in display order.
pub const REGION_OPTIONS: [Region; 6] = Region::ALL;

/// Persisted region selection. Defaults to [`Region::Us`].
pub struct RegionStore {
    region: Writable<Region>,
    storage: Arc<dyn Storage>,
}

impl RegionStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let initial = load_region(storage.as_ref());
        RegionStore {
            region: Writable::new(initial),
            storage,
        }
    }

    pub fn get(&self) -> Region {
        *self.region.get()
    }

    /// Selects the region named by `code`.
    ///
    /// Unknown codes are ignored; returns whether the selection was applied.
    pub fn set_region(&mut self, code: &str) -> bool {
        match code.parse::<Region>() {
            Ok(region) => {
                self.set(region);
                true
            }
            Err(_) => {
                debug!(code, "ignored unknown region");
                false
            }
        }
    }

    /// Selects `region`.
    pub fn set(&mut self, region: Region) {
        if let Err(e) = self.storage.set(REGION_STORAGE_KEY, region.code()) {
            warn!(error = %e, "failed to persist region");
        }
        self.region.set(region);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Region) + Send + 'static) -> SubscriptionId {
        self.region.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.region.unsubscribe(id)
    }
}

fn load_region(storage: &dyn Storage) -> Region {
    match storage.get(REGION_STORAGE_KEY) {
        Ok(Some(stored)) => stored.parse().unwrap_or_else(|_| {
            warn!(stored = %stored, "discarding invalid persisted region");
            if let Err(e) = storage.remove(REGION_STORAGE_KEY) {
                warn!(error = %e, "could not remove invalid region record");
            }
            Region::default()
        }),
        Ok(None) => Region::default(),
        Err(e) => {
            warn!(error = %e, "region storage unreadable, using default");
            Region::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_default_region() {
        let store = RegionStore::load(Arc::new(MemoryStorage::new()));
        assert_eq!(store.get(), Region::Us);
    }

    #[test]
    fn test_set_region_validates() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = RegionStore::load(storage.clone());

        assert!(store.set_region("EU"));
        assert_eq!(store.get(), Region::Eu);
        assert_eq!(storage.get("region").unwrap().as_deref(), Some("EU"));

        assert!(!store.set_region("MARS"));
        assert_eq!(store.get(), Region::Eu);
    }

    #[test]
    fn test_load_persisted_and_invalid() {
        let storage = Arc::new(MemoryStorage::with_records([("region", "IN")]));
        assert_eq!(RegionStore::load(storage).get(), Region::In);

        let storage = Arc::new(MemoryStorage::with_records([("region", "ZZ")]));
        assert_eq!(RegionStore::load(storage.clone()).get(), Region::Us);
        assert_eq!(storage.get("region").unwrap(), None);
    }

    #[test]
    fn test_options_cover_all_regions() {
        let codes: Vec<_> = REGION_OPTIONS.iter().map(Region::code).collect();
        assert_eq!(codes, vec!["US", "EU", "IN", "CA", "AU", "XX"]);
    }
}
