use dayboard_core::{DisplayConfig, KeyValueStore, TaskList, memo, storage::keys, task_store};
use dayboard_timer::{Countdown, parse_minutes};

bitflags::bitflags! {
    /// Persisted entities changed since the last save.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct DirtyEntities: u8 {
        const TASKS = 0b0001;
        const TIMER_DURATION = 0b0010;
        const MEMO = 0b0100;
        const DISPLAY = 0b1000;
    }
}

// AppState holds everything that is persisted plus the live countdown.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) tasks: TaskList,
    pub(crate) timer_minutes: u32,
    pub(crate) memo: String,
    pub(crate) display: DisplayConfig,
    pub(crate) countdown: Countdown,
    dirty: DirtyEntities,
}

impl AppState {
    #[must_use]
    pub(crate) fn load(store: &dyn KeyValueStore) -> Self {
        let timer_minutes = parse_minutes(store.get(keys::TIMER_DURATION).as_deref());
        Self {
            tasks: task_store::load(store),
            timer_minutes,
            memo: memo::load(store),
            display: DisplayConfig::load(store),
            countdown: Countdown::new(timer_minutes),
            dirty: DirtyEntities::empty(),
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Writes every changed entity under its own key and clears the dirty set.
    pub(crate) fn save_dirty(&mut self, store: &mut dyn KeyValueStore) {
        let dirty = std::mem::take(&mut self.dirty);
        if dirty.contains(DirtyEntities::TASKS) {
            task_store::save(store, &self.tasks);
        }
        if dirty.contains(DirtyEntities::TIMER_DURATION) {
            store.set(keys::TIMER_DURATION, self.timer_minutes.to_string());
        }
        if dirty.contains(DirtyEntities::MEMO) {
            memo::save(store, &self.memo);
        }
        if dirty.contains(DirtyEntities::DISPLAY) {
            self.display.save(store);
        }
        if !dirty.is_empty() {
            log::debug!("saved {dirty:?}");
        }
    }
}

/// Mutable view of [`AppState`] that records which entities were touched.
#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut TaskList {
        self.app_state.dirty |= DirtyEntities::TASKS;
        &mut self.app_state.tasks
    }

    pub(crate) fn memo_mut(&mut self) -> &mut String {
        self.app_state.dirty |= DirtyEntities::MEMO;
        &mut self.app_state.memo
    }

    pub(crate) fn display_mut(&mut self) -> &mut DisplayConfig {
        self.app_state.dirty |= DirtyEntities::DISPLAY;
        &mut self.app_state.display
    }

    pub(crate) fn set_timer_minutes(&mut self, minutes: u32) {
        self.app_state.dirty |= DirtyEntities::TIMER_DURATION;
        self.app_state.timer_minutes = minutes;
    }

    /// The countdown itself is not persisted.
    pub(crate) fn countdown_mut(&mut self) -> &mut Countdown {
        &mut self.app_state.countdown
    }
}

#[cfg(test)]
mod tests {
    use dayboard_core::{KeyValueStore, LayoutMode, MemoryStore, TaskId, storage::keys};

    use super::AppState;

    #[test]
    fn test_load_from_empty_store_uses_defaults() {
        let state = AppState::load(&MemoryStore::new());
        assert_eq!(state.tasks.len(), 8);
        assert_eq!(state.timer_minutes, 35);
        assert_eq!(state.countdown.remaining_seconds(), 35 * 60);
        assert!(state.memo.is_empty());
        assert_eq!(state.display.layout, LayoutMode::Both);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_only_touched_entities_are_written() {
        let mut state = AppState::load(&MemoryStore::new());
        let mut store = MemoryStore::new();

        state.access().memo_mut().push_str("buy milk");
        assert!(state.is_dirty());
        state.save_dirty(&mut store);

        assert_eq!(store.get(keys::MEMO).as_deref(), Some("buy milk"));
        assert!(store.get(keys::TASKS).is_none());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_saved_state_loads_back() {
        let mut state = AppState::load(&MemoryStore::new());
        let mut store = MemoryStore::new();

        let mut access = state.access();
        access.tasks_mut().set_done(TaskId::new(2), true);
        access.set_timer_minutes(20);
        access.display_mut().layout = LayoutMode::TasksOnly;
        state.save_dirty(&mut store);

        let reloaded = AppState::load(&store);
        assert_eq!(reloaded.tasks, state.tasks);
        assert_eq!(reloaded.timer_minutes, 20);
        assert_eq!(reloaded.display.layout, LayoutMode::TasksOnly);
    }

    #[test]
    fn test_countdown_changes_do_not_mark_dirty() {
        let mut state = AppState::load(&MemoryStore::new());
        state.access().countdown_mut().start();
        assert!(!state.is_dirty());
    }
}
