//! Detects when every task has been checked off.

use crate::TaskList;

/// A change in the all-done state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CompletionSignal {
    /// Every task is now done: play the completion sound and show the overlay.
    Celebrate,
    /// A task was reopened or the list changed: hide the overlay.
    Dismiss,
}

/// Remembers whether the completion overlay is showing and reports
/// transitions only.
#[derive(Debug, Default, Clone)]
pub struct CompletionWatcher {
    celebrating: bool,
}

impl CompletionWatcher {
    /// Creates a watcher that is not celebrating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the completion overlay should be visible.
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// Re-evaluates `tasks` after a mutation.
    ///
    /// An empty list is never complete.
    pub fn observe(&mut self, tasks: &TaskList) -> Option<CompletionSignal> {
        let all_done = tasks.all_done();
        if all_done == self.celebrating {
            return None;
        }
        self.celebrating = all_done;
        Some(if all_done {
            CompletionSignal::Celebrate
        } else {
            CompletionSignal::Dismiss
        })
    }
}
