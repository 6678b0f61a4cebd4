//! Ordered task list.

use std::slice;

use crate::{Task, TaskId};

/// Result of setting a task's completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DoneTransition {
    /// The task went from not done to done.
    Completed,
    /// The task went from done to not done.
    Reopened,
    /// The flag already had the requested value.
    Unchanged,
}

/// Tasks in display order.
///
/// Order is significant and there is no separate sort key. Identifiers are
/// unique within the list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates a list from tasks in display order.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = tasks.iter().map(|task| task.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "task identifiers must be unique"
        );
        Self { tasks }
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the tasks in board order.
    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks in board order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Sets the completion flag of task `id`.
    ///
    /// Returns `None` if no such task exists.
    pub fn set_done(&mut self, id: TaskId, done: bool) -> Option<DoneTransition> {
        let task = self.get_mut(id)?;
        let transition = match (task.done, done) {
            (false, true) => DoneTransition::Completed,
            (true, false) => DoneTransition::Reopened,
            _ => DoneTransition::Unchanged,
        };
        task.done = done;
        Some(transition)
    }

    /// Replaces the text (or image caption) of task `id`.
    ///
    /// Returns `true` if the stored text changed.
    pub fn set_text(&mut self, id: TaskId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(task) if task.payload.text() != text => {
                task.set_text(text.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the list is non-empty and every task is done.
    #[must_use]
    pub fn all_done(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.done)
    }

    /// Clears every completion flag.
    pub fn reset_all_done(&mut self) {
        for task in &mut self.tasks {
            task.done = false;
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
