use std::mem;

use dayboard_core::{DisplayConfig, DraftRow, RowId, RowMove, SettingsDraft, TaskId};
use dayboard_timer::TickHandle;

use crate::image_import::ImageSource;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
    Flow(FlowAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Board(BoardAction),
    Memo(MemoAction),
    Timer(TimerAction),
    Settings(SettingsAction),
}

#[derive(Debug)]
pub(crate) enum BoardAction {
    SetDone { id: TaskId, done: bool },
    CommitText { id: TaskId, text: String },
    ResetAllDone,
    /// Re-evaluates the all-done state, e.g. after loading.
    CheckCompletion,
}

#[derive(Debug)]
pub(crate) enum MemoAction {
    Replace(String),
}

#[derive(Debug)]
pub(crate) enum TimerAction {
    Toggle,
    Reset,
    Tick(TickHandle),
    StartExtension,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    Open,
    Close,
    AddRow,
    RemoveRow(RowId),
    MoveRow(RowId, RowMove),
    EditRow(Box<DraftRow>),
    EditOptions {
        timer_minutes: u32,
        display: DisplayConfig,
    },
    ApplyDecodedImage {
        row_id: RowId,
        data_uri: String,
    },
    Commit,
}

#[derive(Debug)]
pub(crate) enum UiAction {
    EditTaskText { id: TaskId, text: String },
    ShowExtendForm,
    EditExtendMinutes(String),
    ChooseImage(RowId),
}

#[derive(Debug)]
pub(crate) enum FlowAction {
    ImportImage { row_id: RowId, source: ImageSource },
}

impl From<BoardAction> for Action {
    fn from(action: BoardAction) -> Self {
        Action::App(action.into())
    }
}

impl From<MemoAction> for Action {
    fn from(action: MemoAction) -> Self {
        Action::App(action.into())
    }
}

impl From<TimerAction> for Action {
    fn from(action: TimerAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug)]
pub(crate) enum ModalRequest {
    Settings(Box<SettingsDraft>),
}

/// State of the prompt shown when the countdown expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExpiryPrompt {
    Choices,
    Extend { minutes: String },
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue, AppAction, BoardAction, TimerAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(TimerAction::Toggle.into());
        queue.request(BoardAction::ResetAllDone.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::App(AppAction::Timer(TimerAction::Toggle))
        ));
        assert!(matches!(
            drained[1],
            Action::App(AppAction::Board(BoardAction::ResetAllDone))
        ));
        assert!(queue.take_all().is_empty());
    }
}
