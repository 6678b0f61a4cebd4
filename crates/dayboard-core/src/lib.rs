//! Core state for the Dayboard schedule board.
//!
//! This crate holds everything about the board that does not depend on a
//! rendering surface: the task model and its persisted wire format, the
//! key/value persistence contract, display options, the memo, the
//! completion watcher, and the settings draft that is committed back into
//! the task list in one batch.
//!
//! # Overview
//!
//! 1. **Model** - [`task`] defines [`Task`] and its identifier, [`task_list`]
//!    the ordered [`TaskList`].
//! 2. **Persistence** - [`storage`] defines the [`KeyValueStore`] contract and
//!    the persisted keys; [`task_store`], [`display`] and [`memo`] load and
//!    save their entity under a single key each.
//! 3. **Projection** - [`board`] turns a task and its index into a
//!    [`BoardRow`] that any rendering surface can paint.
//! 4. **Editing** - [`draft`] stages settings edits and reconciles them with
//!    the live list on commit; [`completion`] reports all-done transitions.
//!
//! # Examples
//!
//! ```
//! use dayboard_core::{CompletionSignal, CompletionWatcher, MemoryStore, task_store};
//!
//! let mut store = MemoryStore::new();
//! let mut tasks = task_store::load(&store);
//! assert_eq!(tasks.len(), 8);
//!
//! let ids: Vec<_> = tasks.iter().map(|task| task.id).collect();
//! for id in ids {
//!     tasks.set_done(id, true);
//! }
//! task_store::save(&mut store, &tasks);
//!
//! let mut watcher = CompletionWatcher::new();
//! assert_eq!(watcher.observe(&tasks), Some(CompletionSignal::Celebrate));
//! ```

pub mod board;
pub mod completion;
pub mod data_uri;
pub mod display;
pub mod draft;
pub mod icon;
pub mod memo;
pub mod sound;
pub mod storage;
pub mod task;
mod task_dto;
pub mod task_list;
pub mod task_store;

pub use self::{
    board::{BoardRow, RowPayload, project_row},
    completion::{CompletionSignal, CompletionWatcher},
    display::{DisplayConfig, LayoutMode, StyleToggles},
    draft::{DraftRow, RowId, RowMove, SettingsCommit, SettingsDraft},
    sound::SoundEffect,
    storage::{KeyValueStore, MemoryStore},
    task::{Payload, PayloadKind, Task, TaskId},
    task_list::{DoneTransition, TaskList},
    task_store::{TaskIdGenerator, TaskStoreError},
};
