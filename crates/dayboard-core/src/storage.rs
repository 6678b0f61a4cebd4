//! Key/value persistence contract.
//!
//! Every persisted entity (task list, timer duration, memo, each display
//! option) lives under its own string key. Writes are independent: there is
//! no transaction spanning several keys.

use std::collections::BTreeMap;

/// Persisted key names.
///
/// These match the keys written by earlier releases of the board so that
/// existing browser storage keeps loading.
pub mod keys {
    /// JSON-encoded task list.
    pub const TASKS: &str = "scheduleTasks";
    /// Timer duration in whole minutes.
    pub const TIMER_DURATION: &str = "timerDuration";
    /// Free-text memo.
    pub const MEMO: &str = "memoContent";
    /// Layout mode (`both`, `timer`, `tasks`).
    pub const DISPLAY_MODE: &str = "displayMode";
    /// Position number visibility.
    pub const SHOW_NUMBER: &str = "showNumber";
    /// Time label visibility.
    pub const SHOW_TIME: &str = "showTime";
    /// Memo visibility.
    pub const SHOW_MEMO: &str = "showMemo";
    /// Done checkbox visibility.
    pub const SHOW_CHECK: &str = "showCheck";

    /// Every key above.
    pub const ALL: [&str; 8] = [
        TASKS,
        TIMER_DURATION,
        MEMO,
        DISPLAY_MODE,
        SHOW_NUMBER,
        SHOW_TIME,
        SHOW_MEMO,
        SHOW_CHECK,
    ];
}

/// Synchronous, best-effort string storage.
///
/// Implementations must make a value written by [`set`](Self::set) visible to
/// every later [`get`](Self::get) on the same store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store, used headless and in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn test_set_then_get_returns_latest_value() {
        let mut store = MemoryStore::new();
        assert!(store.get("memoContent").is_none());

        store.set("memoContent", "first".to_owned());
        store.set("memoContent", "second".to_owned());

        assert_eq!(store.get("memoContent").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }
}
