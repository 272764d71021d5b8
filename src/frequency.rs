//! Frequency Tracker
//!
//! Persisted purchase counts per item id, stored as a JSON object
//! (`{"milk": 3, "eggs": 1}`) under a single storage key.

use std::collections::BTreeMap;

use crate::storage::{KeyValueStore, StorageResult};

pub type FrequencyMap = BTreeMap<String, u32>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTracker {
    key: String,
    counts: FrequencyMap,
}

impl FrequencyTracker {
    pub fn new(key: impl Into<String>, counts: FrequencyMap) -> Self {
        Self { key: key.into(), counts }
    }

    /// Read counts from storage. Missing, unreadable or corrupt data yields
    /// an empty map.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let counts = match store.get(key) {
            Ok(Some(json)) => match serde_json::from_str::<FrequencyMap>(&json) {
                Ok(counts) => counts,
                Err(e) => {
                    log::warn!("[frequency] Ignoring corrupt frequency data: {}", e);
                    FrequencyMap::new()
                }
            },
            Ok(None) => FrequencyMap::new(),
            Err(e) => {
                log::warn!("[frequency] Could not read frequency data: {}", e);
                FrequencyMap::new()
            }
        };
        log::debug!("[frequency] Loaded {} counts", counts.len());
        Self::new(key, counts)
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> StorageResult<()> {
        let json = serde_json::to_string(&self.counts)?;
        store.set(&self.key, &json)
    }

    pub fn get(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &FrequencyMap {
        &self.counts
    }

    /// Add one purchase to each id
    pub fn record<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        let mut recorded = 0;
        for id in ids {
            let count = self.counts.entry(id.to_string()).or_insert(0);
            *count = count.saturating_add(1);
            recorded += 1;
        }
        recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        let tracker = FrequencyTracker::load(&store, "freq");
        assert!(tracker.counts().is_empty());
    }

    #[test]
    fn test_corrupt_json_loads_empty() {
        let store = MemoryStore::with_entry("freq", "{not json");
        let tracker = FrequencyTracker::load(&store, "freq");
        assert!(tracker.counts().is_empty());

        let store = MemoryStore::with_entry("freq", r#"{"milk": -2}"#);
        assert!(FrequencyTracker::load(&store, "freq").counts().is_empty());
    }

    #[test]
    fn test_record_saturates_at_max() {
        let store = MemoryStore::with_entry("freq", r#"{"milk":4294967295}"#);
        let mut tracker = FrequencyTracker::load(&store, "freq");
        assert_eq!(tracker.get("milk"), u32::MAX);
        tracker.record(["milk"]);
        assert_eq!(tracker.get("milk"), u32::MAX);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryStore::new();
        let mut tracker = FrequencyTracker::load(&store, "freq");
        tracker.record(["milk", "eggs", "milk"]);
        tracker.save(&store).unwrap();

        assert_eq!(store.get("freq").unwrap().as_deref(), Some(r#"{"eggs":1,"milk":2}"#));
        let reloaded = FrequencyTracker::load(&store, "freq");
        assert_eq!(reloaded, tracker);
        assert_eq!(reloaded.get("milk"), 2);
        assert_eq!(reloaded.get("bread"), 0);
    }
}
