//! Display options: which board fields are visible and which panels are shown.

use crate::{KeyValueStore, storage::keys};

/// Which panels the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum LayoutMode {
    /// Timer and task list side by side.
    #[default]
    Both,
    /// Only the timer.
    TimerOnly,
    /// Only the task list (and memo).
    TasksOnly,
}

impl LayoutMode {
    /// All modes, in selector order.
    pub const ALL: [Self; 3] = [Self::Both, Self::TimerOnly, Self::TasksOnly];

    /// Parses a stored value. Unknown values fall back to [`LayoutMode::Both`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("timer") => Self::TimerOnly,
            Some("tasks") => Self::TasksOnly,
            _ => Self::Both,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::TimerOnly => "timer",
            Self::TasksOnly => "tasks",
        }
    }

    /// Label shown in the settings layout picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Both => "Timer and tasks",
            Self::TimerOnly => "Timer only",
            Self::TasksOnly => "Tasks only",
        }
    }

    /// Whether the countdown panel is visible.
    #[must_use]
    pub const fn shows_timer(self) -> bool {
        !matches!(self, Self::TasksOnly)
    }

    /// Whether the task board (and with it the memo) is visible.
    #[must_use]
    pub const fn shows_tasks(self) -> bool {
        !matches!(self, Self::TimerOnly)
    }
}

bitflags::bitflags! {
    /// Style toggles derived from a [`DisplayConfig`].
    ///
    /// Each flag hides one field of the board when set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleToggles: u8 {
        /// Hide the position numbers.
        const HIDE_NUMBERS = 0b0001;
        /// Hide the time labels.
        const HIDE_TIMES = 0b0010;
        /// Hide the memo.
        const HIDE_MEMO = 0b0100;
        /// Hide the done checkboxes.
        const HIDE_CHECKS = 0b1000;
    }
}

/// Independent visibility flags plus the layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    /// Show the 1-based position number of each task.
    pub show_number: bool,
    /// Show the time label of each task.
    pub show_time: bool,
    /// Show the memo panel.
    pub show_memo: bool,
    /// Show the done checkbox of each task.
    pub show_check: bool,
    /// Which panels are shown.
    pub layout: LayoutMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_number: true,
            show_time: true,
            show_memo: true,
            show_check: true,
            layout: LayoutMode::Both,
        }
    }
}

/// Parses a stored visibility flag.
///
/// Only the literal `"false"` hides a field: a missing value or any other
/// string means shown.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    value != Some("false")
}

impl DisplayConfig {
    /// Reads every option from `store`, defaulting to shown / [`LayoutMode::Both`].
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let flag = |key| parse_flag(store.get(key).as_deref());
        Self {
            show_number: flag(keys::SHOW_NUMBER),
            show_time: flag(keys::SHOW_TIME),
            show_memo: flag(keys::SHOW_MEMO),
            show_check: flag(keys::SHOW_CHECK),
            layout: LayoutMode::parse(store.get(keys::DISPLAY_MODE).as_deref()),
        }
    }

    /// Writes every option, each under its own key.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(keys::DISPLAY_MODE, self.layout.as_stored().to_owned());
        store.set(keys::SHOW_NUMBER, self.show_number.to_string());
        store.set(keys::SHOW_TIME, self.show_time.to_string());
        store.set(keys::SHOW_MEMO, self.show_memo.to_string());
        store.set(keys::SHOW_CHECK, self.show_check.to_string());
    }

    /// Translates the flags into style toggles.
    #[must_use]
    pub fn style_toggles(&self) -> StyleToggles {
        let mut toggles = StyleToggles::empty();
        toggles.set(StyleToggles::HIDE_NUMBERS, !self.show_number);
        toggles.set(StyleToggles::HIDE_TIMES, !self.show_time);
        toggles.set(StyleToggles::HIDE_MEMO, !self.show_memo);
        toggles.set(StyleToggles::HIDE_CHECKS, !self.show_check);
        toggles
    }
}
