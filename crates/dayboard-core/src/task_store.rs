//! Loading, saving and creating tasks.
//!
//! The whole list is stored as one JSON array under
//! [`keys::TASKS`](crate::storage::keys::TASKS) and rewritten after every
//! mutation.

use crate::{
    KeyValueStore, Payload, Task, TaskId, TaskList, icon::DEFAULT_ICON, storage::keys,
    task_dto::TaskDto,
};

/// Error decoding a stored task list.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TaskStoreError {
    /// The stored value is not a JSON array of task records.
    #[display("stored task list is malformed: {_0}")]
    Malformed(#[from] serde_json::Error),
    /// Two stored records share an identifier.
    #[display("stored task list repeats identifier {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: TaskId,
    },
}

/// Time label given to newly added tasks.
pub const DEFAULT_TIME: &str = "00:00";

/// Reads the stored task list.
///
/// Returns `Ok(None)` if nothing has been stored yet.
///
/// # Errors
///
/// Returns [`TaskStoreError`] if the stored value cannot be decoded.
pub fn try_load(store: &dyn KeyValueStore) -> Result<Option<TaskList>, TaskStoreError> {
    let Some(stored) = store.get(keys::TASKS) else {
        return Ok(None);
    };
    let records: Vec<TaskDto> = serde_json::from_str(&stored)?;
    let tasks: Vec<Task> = records.into_iter().map(Task::from).collect();
    for (i, task) in tasks.iter().enumerate() {
        if tasks[..i].iter().any(|other| other.id == task.id) {
            return Err(TaskStoreError::DuplicateId { id: task.id });
        }
    }
    Ok(Some(TaskList::from_tasks(tasks)))
}

/// Reads the stored task list, falling back to [`default_schedule`].
///
/// A stored value that cannot be decoded is logged and replaced by the
/// default schedule rather than aborting startup.
#[must_use]
pub fn load(store: &dyn KeyValueStore) -> TaskList {
    match try_load(store) {
        Ok(Some(tasks)) => tasks,
        Ok(None) => {
            log::info!("no stored task list, using the default schedule");
            default_schedule()
        }
        Err(err) => {
            log::warn!("{err}; using the default schedule");
            default_schedule()
        }
    }
}

/// Writes the whole list.
pub fn save(store: &mut dyn KeyValueStore, tasks: &TaskList) {
    let records: Vec<TaskDto> = tasks.iter().map(TaskDto::from).collect();
    match serde_json::to_string(&records) {
        Ok(json) => store.set(keys::TASKS, json),
        Err(err) => log::error!("failed to encode task list: {err}"),
    }
}

/// The schedule used when nothing has been stored.
#[must_use]
pub fn default_schedule() -> TaskList {
    const ENTRIES: [(u64, &str, &str, &str); 8] = [
        (1, "7:30~8:15", "🥣", "起床、身だしなみ、朝ごはん"),
        (2, "8:35~9:20", "🅰️", "外遊び"),
        (3, "9:40~10:25", "✏️", "宿題、読書、工作"),
        (4, "10:45~12:00", "🔍", "家の手伝い"),
        (5, "14:00~15:30", "🎹", "楽器の練習"),
        (6, "15:30~17:30", "🌺", "家族の時間"),
        (7, "17:30~19:00", "🧹", "運動・休憩"),
        (8, "20:00~21:00", "⭐", "明日の準備"),
    ];

    let mut tasks: Vec<Task> = ENTRIES
        .iter()
        .map(|&(id, time, icon, text)| Task::text(TaskId::new(id), time, icon, text))
        .collect();
    tasks[0].done = true;
    TaskList::from_tasks(tasks)
}

/// A blank task for the settings editor.
#[must_use]
pub fn create_draft(id: TaskId) -> Task {
    Task {
        id,
        time: DEFAULT_TIME.to_owned(),
        icon: DEFAULT_ICON.to_owned(),
        payload: Payload::empty_text(),
        done: false,
    }
}

/// Mints task identifiers from a millisecond clock.
///
/// Identifiers are strictly increasing even if the clock stalls or goes
/// backwards, and never collide with the identifiers the generator was
/// seeded with.
#[derive(Debug, Default, Clone)]
pub struct TaskIdGenerator {
    last: u64,
}

impl TaskIdGenerator {
    /// Creates a generator that will not reissue any identifier in `tasks`.
    #[must_use]
    pub fn seeded(tasks: &TaskList) -> Self {
        let last = tasks.iter().map(|task| task.id.get()).max().unwrap_or(0);
        Self { last }
    }

    /// Mints an identifier from the current clock reading.
    pub fn next(&mut self, now_millis: u64) -> TaskId {
        self.last = now_millis.max(self.last.saturating_add(1));
        TaskId::new(self.last)
    }
}
