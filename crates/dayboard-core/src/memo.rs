//! Free-text memo, stored verbatim.

use crate::{KeyValueStore, storage::keys};

/// Reads the memo. Missing means empty.
#[must_use]
pub fn load(store: &dyn KeyValueStore) -> String {
    store.get(keys::MEMO).unwrap_or_default()
}

/// Writes the memo.
pub fn save(store: &mut dyn KeyValueStore, memo: &str) {
    store.set(keys::MEMO, memo.to_owned());
}

#[cfg(test)]
mod tests {
    use super::{load, save};
    use crate::MemoryStore;

    #[test]
    fn test_memo_is_stored_verbatim() {
        let mut store = MemoryStore::new();
        assert_eq!(load(&store), "");

        save(&mut store, "  line one\nline two  ");
        assert_eq!(load(&store), "  line one\nline two  ");
    }
}
