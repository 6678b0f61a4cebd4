//! Settings editor draft.
//!
//! The editor works on a copy of the task list and the display options.
//! Nothing reaches the live [`TaskList`] until [`SettingsDraft::commit`]
//! builds the replacement list in one step.
//!
//! Rows carry the identifier of the task they were created from, so commit
//! reconciles rows with live tasks by identifier. Deleting or reordering rows
//! never moves a completion flag onto a different task.

use crate::{
    DisplayConfig, Payload, PayloadKind, Task, TaskId, TaskList, icon, task_store::create_draft,
};

/// Editor-local key of a draft row.
///
/// Row ids are only unique within one draft and are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct RowId(u64);

/// Direction for [`SettingsDraft::move_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMove {
    /// Towards the top of the list.
    Up,
    /// Towards the bottom of the list.
    Down,
}

/// An uncommitted edit of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    /// Key of this row within the draft.
    pub row_id: RowId,
    /// Identifier of the task this row edits, or a fresh one for added rows.
    pub task_id: TaskId,
    /// Free-text time label.
    pub time: String,
    /// Icon glyph.
    pub icon: String,
    /// Whether the row commits as a text or a picture task.
    pub kind: PayloadKind,
    /// Text, or the caption when `kind` is [`PayloadKind::Image`].
    pub text: String,
    /// Staged picture. Kept while the kind is switched back and forth.
    pub image_src: String,
    legacy_icon: Option<String>,
}

impl DraftRow {
    fn from_task(row_id: RowId, task: &Task) -> Self {
        Self {
            row_id,
            task_id: task.id,
            time: task.time.clone(),
            icon: task.icon.clone(),
            kind: task.payload.kind(),
            text: task.payload.text().to_owned(),
            image_src: task.payload.image_src().unwrap_or_default().to_owned(),
            legacy_icon: (!icon::is_palette_icon(&task.icon)).then(|| task.icon.clone()),
        }
    }

    /// Icons the selector offers for this row.
    ///
    /// A legacy icon the row was opened with stays selectable even after the
    /// user picks another one.
    #[must_use]
    pub fn icon_choices(&self) -> Vec<&str> {
        match &self.legacy_icon {
            Some(legacy) => icon::icon_choices(legacy),
            None => icon::ICON_PALETTE.to_vec(),
        }
    }

    fn to_task(&self, done: bool) -> Task {
        let payload = match self.kind {
            PayloadKind::Text => Payload::Text {
                text: self.text.clone(),
            },
            PayloadKind::Image => Payload::Image {
                image_src: self.image_src.clone(),
                caption: self.text.clone(),
            },
        };
        Task {
            id: self.task_id,
            time: self.time.clone(),
            icon: self.icon.clone(),
            payload,
            done,
        }
    }
}

/// Result of committing a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsCommit {
    /// Replacement task list, in row order.
    pub tasks: TaskList,
    /// Requested timer duration in minutes. Zero means "leave unchanged".
    pub timer_minutes: u32,
    /// Display options to apply.
    pub display: DisplayConfig,
}

/// Staged edits of the settings editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    rows: Vec<DraftRow>,
    next_row_id: u64,
    /// Timer duration field, in minutes.
    pub timer_minutes: u32,
    /// Display option fields.
    pub display: DisplayConfig,
}

impl SettingsDraft {
    /// Opens a draft with one row per task.
    #[must_use]
    pub fn new(tasks: &TaskList, timer_minutes: u32, display: DisplayConfig) -> Self {
        let mut draft = Self {
            rows: Vec::with_capacity(tasks.len()),
            next_row_id: 0,
            timer_minutes,
            display,
        };
        for task in tasks {
            let row_id = draft.mint_row_id();
            draft.rows.push(DraftRow::from_task(row_id, task));
        }
        draft
    }

    fn mint_row_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    /// Whether the row is still part of the draft.
    #[must_use]
    pub fn contains_row(&self, row_id: RowId) -> bool {
        self.rows.iter().any(|row| row.row_id == row_id)
    }

    /// Mutable access to one row, if it still exists.
    pub fn row_mut(&mut self, row_id: RowId) -> Option<&mut DraftRow> {
        self.rows.iter_mut().find(|row| row.row_id == row_id)
    }

    /// Appends a blank row for a new task with identifier `task_id`.
    pub fn add_row(&mut self, task_id: TaskId) -> RowId {
        let row_id = self.mint_row_id();
        self.rows
            .push(DraftRow::from_task(row_id, &create_draft(task_id)));
        row_id
    }

    /// Removes a row from the draft. The live list is untouched.
    pub fn remove_row(&mut self, row_id: RowId) -> bool {
        let len = self.rows.len();
        self.rows.retain(|row| row.row_id != row_id);
        self.rows.len() != len
    }

    /// Swaps a row with its neighbour. Returns `false` at either end.
    pub fn move_row(&mut self, row_id: RowId, direction: RowMove) -> bool {
        let Some(index) = self.rows.iter().position(|row| row.row_id == row_id) else {
            return false;
        };
        let target = match direction {
            RowMove::Up => index.checked_sub(1),
            RowMove::Down => Some(index + 1).filter(|&target| target < self.rows.len()),
        };
        match target {
            Some(target) => {
                self.rows.swap(index, target);
                true
            }
            None => false,
        }
    }

    /// Stores a decoded picture on `row_id`.
    ///
    /// Returns `false`, discarding the picture, if the row was removed while
    /// the picture was being read.
    pub fn apply_decoded_image(&mut self, row_id: RowId, data_uri: String) -> bool {
        match self.row_mut(row_id) {
            Some(row) => {
                row.image_src = data_uri;
                true
            }
            None => false,
        }
    }

    /// Builds the replacement task list.
    ///
    /// Each row keeps the completion flag of the live task with the same
    /// identifier; rows without a live counterpart start not done.
    #[must_use]
    pub fn commit(&self, existing: &TaskList) -> SettingsCommit {
        let tasks = self
            .rows
            .iter()
            .map(|row| {
                let done = existing.get(row.task_id).is_some_and(|task| task.done);
                row.to_task(done)
            })
            .collect();
        SettingsCommit {
            tasks: TaskList::from_tasks(tasks),
            timer_minutes: self.timer_minutes,
            display: self.display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RowMove, SettingsDraft};
    use crate::{
        DisplayConfig, LayoutMode, Payload, PayloadKind, Task, TaskId, TaskList, icon,
        task_store::default_schedule,
    };

    fn open(tasks: &TaskList) -> SettingsDraft {
        SettingsDraft::new(tasks, 35, DisplayConfig::default())
    }

    fn ids_and_done(tasks: &TaskList) -> Vec<(u64, bool)> {
        tasks.iter().map(|task| (task.id.get(), task.done)).collect()
    }

    #[test]
    fn test_commit_without_edits_reproduces_the_list() {
        let tasks = default_schedule();
        let commit = open(&tasks).commit(&tasks);
        assert_eq!(commit.tasks, tasks);
        assert_eq!(commit.timer_minutes, 35);
    }

    #[test]
    fn test_deleting_first_row_keeps_identity_of_the_rest() {
        let mut tasks = default_schedule();
        tasks.set_done(TaskId::new(3), true);
        let mut draft = open(&tasks);

        let first = draft.rows()[0].row_id;
        assert!(draft.remove_row(first));
        let commit = draft.commit(&tasks);

        assert_eq!(
            ids_and_done(&commit.tasks),
            [
                (2, false),
                (3, true),
                (4, false),
                (5, false),
                (6, false),
                (7, false),
                (8, false),
            ]
        );
        // The live list is untouched until the commit is applied.
        assert_eq!(tasks.len(), 8);
    }

    #[test]
    fn test_moving_rows_moves_done_flags_with_them() {
        let tasks = default_schedule();
        let mut draft = open(&tasks);
        let first = draft.rows()[0].row_id;

        assert!(!draft.move_row(first, RowMove::Up));
        assert!(draft.move_row(first, RowMove::Down));
        let commit = draft.commit(&tasks);

        assert_eq!(&ids_and_done(&commit.tasks)[..2], [(2, false), (1, true)]);
    }

    #[test]
    fn test_added_row_starts_blank_and_not_done() {
        let tasks = default_schedule();
        let mut draft = open(&tasks);
        let row_id = draft.add_row(TaskId::new(1_700_000_000_000));
        let row = draft.row_mut(row_id).unwrap();
        row.text = "piano".to_owned();

        let commit = draft.commit(&tasks);
        let added = commit.tasks.as_slice().last().unwrap();
        assert_eq!(added.id, TaskId::new(1_700_000_000_000));
        assert_eq!(added.time, "00:00");
        assert_eq!(added.icon, icon::DEFAULT_ICON);
        assert!(!added.done);
        assert_eq!(
            added.payload,
            Payload::Text {
                text: "piano".to_owned()
            }
        );
    }

    #[test]
    fn test_decoded_image_for_removed_row_is_discarded() {
        let tasks = default_schedule();
        let mut draft = open(&tasks);
        let row_id = draft.rows()[1].row_id;

        assert!(draft.remove_row(row_id));
        assert!(!draft.apply_decoded_image(row_id, "data:image/png;base64,AA==".to_owned()));
        assert!(!draft.contains_row(row_id));
    }

    #[test]
    fn test_image_row_commits_image_payload() {
        let tasks = default_schedule();
        let mut draft = open(&tasks);
        let row_id = draft.rows()[2].row_id;
        draft.row_mut(row_id).unwrap().kind = PayloadKind::Image;
        assert!(draft.apply_decoded_image(row_id, "data:image/png;base64,AA==".to_owned()));

        let commit = draft.commit(&tasks);
        assert_eq!(
            commit.tasks.as_slice()[2].payload,
            Payload::Image {
                image_src: "data:image/png;base64,AA==".to_owned(),
                caption: "宿題、読書、工作".to_owned(),
            }
        );
    }

    #[test]
    fn test_legacy_icon_stays_selectable_after_change() {
        let tasks = TaskList::from_tasks(vec![Task::text(TaskId::new(1), "8:00", "🦖", "dino")]);
        let mut draft = open(&tasks);
        let row_id = draft.rows()[0].row_id;

        let row = draft.row_mut(row_id).unwrap();
        row.icon = "⭐".to_owned();
        assert!(row.icon_choices().contains(&"🦖"));

        let commit = draft.commit(&tasks);
        assert_eq!(commit.tasks.as_slice()[0].icon, "⭐");
    }

    #[test]
    fn test_display_edits_are_carried_into_commit() {
        let tasks = default_schedule();
        let mut draft = open(&tasks);
        draft.display.show_memo = false;
        draft.display.layout = LayoutMode::TimerOnly;
        draft.timer_minutes = 20;

        let commit = draft.commit(&tasks);
        assert!(!commit.display.show_memo);
        assert_eq!(commit.display.layout, LayoutMode::TimerOnly);
        assert_eq!(commit.timer_minutes, 20);
    }
}
