//! Bridges [`KeyValueStore`] to `eframe` storage.
//!
//! On the web `eframe` storage is the browser's `localStorage`, so the keys
//! written here are the plain [`keys`] strings.

use dayboard_core::{KeyValueStore, MemoryStore, storage::keys};
use eframe::Storage;

/// Write-through adapter over the frame's storage.
pub(crate) struct EframeStore<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> EframeStore<'a> {
    pub(crate) fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.storage.set_string(key, value);
    }
}

/// Copies every persisted key out of `storage`.
///
/// Startup only gets shared access to storage, so the state is loaded from a
/// snapshot instead.
pub(crate) fn snapshot(storage: &dyn Storage) -> MemoryStore {
    let mut store = MemoryStore::new();
    for key in keys::ALL {
        if let Some(value) = storage.get_string(key) {
            store.set(key, value);
        }
    }
    log::debug!("loaded {} stored keys", store.len());
    store
}
