mod flows;

use dayboard_core::{CompletionSignal, DoneTransition, RowId, SettingsDraft, SoundEffect, TaskId};
use dayboard_timer::{TickHandle, TickOutcome};

use crate::{
    action::{
        Action, ActionRequestQueue, AppAction, BoardAction, ExpiryPrompt, FlowAction, MemoAction,
        ModalRequest, SettingsAction, TimerAction, UiAction,
    },
    flow_executor::FlowKey,
    image_import::ImageSource,
    platform,
    state::{AppState, AppStateAccess, UiState},
};

/// Minutes pre-filled in the extension form.
const DEFAULT_EXTENSION_MINUTES: &str = "5";

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    match action {
        Action::App(AppAction::Board(action)) => ctx.handle_board(action),
        Action::App(AppAction::Memo(MemoAction::Replace(memo))) => {
            if ctx.app_state.as_ref().memo != memo {
                *ctx.app_state.memo_mut() = memo;
            }
        }
        Action::App(AppAction::Timer(action)) => ctx.handle_timer(action),
        Action::App(AppAction::Settings(action)) => ctx.handle_settings(action),
        Action::Ui(action) => ctx.handle_ui(action),
        Action::Flow(FlowAction::ImportImage { row_id, source }) => {
            ctx.start_image_import(row_id, source);
        }
    }
}

impl ActionContext<'_> {
    fn handle_board(&mut self, action: BoardAction) {
        match action {
            BoardAction::SetDone { id, done } => self.set_done(id, done),
            BoardAction::CommitText { id, text } => self.commit_text(id, &text),
            BoardAction::ResetAllDone => {
                self.app_state.tasks_mut().reset_all_done();
                self.check_completion();
            }
            BoardAction::CheckCompletion => self.check_completion(),
        }
    }

    fn set_done(&mut self, id: TaskId, done: bool) {
        match self.app_state.tasks_mut().set_done(id, done) {
            Some(DoneTransition::Completed) => self.ui_state.queue_sound(SoundEffect::Success),
            Some(DoneTransition::Reopened | DoneTransition::Unchanged) => {}
            None => {
                log::warn!("ignoring completion change for unknown task {id}");
                return;
            }
        }
        self.check_completion();
    }

    fn commit_text(&mut self, id: TaskId, text: &str) {
        self.ui_state.text_edits.remove(&id);
        let unchanged = self
            .app_state
            .as_ref()
            .tasks
            .get(id)
            .is_none_or(|task| task.payload.text() == text);
        if !unchanged {
            self.app_state.tasks_mut().set_text(id, text);
        }
    }

    fn flush_text_edits(&mut self) {
        for (id, text) in std::mem::take(&mut self.ui_state.text_edits) {
            self.commit_text(id, &text);
        }
    }

    fn check_completion(&mut self) {
        match self.ui_state.completion.observe(&self.app_state.as_ref().tasks) {
            Some(CompletionSignal::Celebrate) => {
                log::info!("all tasks done");
                self.ui_state.queue_sound(SoundEffect::Completion);
            }
            Some(CompletionSignal::Dismiss) => log::debug!("completion overlay dismissed"),
            None => {}
        }
    }

    fn handle_timer(&mut self, action: TimerAction) {
        match action {
            TimerAction::Toggle => {
                self.app_state.countdown_mut().toggle();
            }
            TimerAction::Reset => self.reset_timer(),
            TimerAction::Tick(handle) => self.tick(handle),
            TimerAction::StartExtension => self.start_extension(),
        }
    }

    fn reset_timer(&mut self) {
        let minutes = self.app_state.as_ref().timer_minutes;
        self.app_state.countdown_mut().reset(minutes);
        self.ui_state.expiry_prompt = None;
    }

    fn tick(&mut self, handle: TickHandle) {
        if self.app_state.countdown_mut().tick(handle) == TickOutcome::Expired {
            log::info!("countdown expired");
            self.ui_state.queue_sound(SoundEffect::Alarm);
            self.ui_state.expiry_prompt = Some(ExpiryPrompt::Choices);
        }
    }

    fn start_extension(&mut self) {
        let Some(ExpiryPrompt::Extend { minutes }) = &self.ui_state.expiry_prompt else {
            return;
        };
        let Ok(minutes) = minutes.trim().parse::<i64>() else {
            return;
        };
        if self.app_state.countdown_mut().extend(minutes).is_some() {
            self.ui_state.expiry_prompt = None;
        }
    }

    fn handle_settings(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::Open => self.open_settings(),
            SettingsAction::Close => self.close_settings(),
            SettingsAction::AddRow => {
                let id = self.ui_state.id_generator.next(platform::now_millis());
                if let Some(draft) = self.ui_state.settings_draft_mut() {
                    draft.add_row(id);
                }
            }
            SettingsAction::RemoveRow(row_id) => self.remove_row(row_id),
            SettingsAction::MoveRow(row_id, direction) => {
                if let Some(draft) = self.ui_state.settings_draft_mut() {
                    draft.move_row(row_id, direction);
                }
            }
            SettingsAction::EditRow(row) => {
                if let Some(target) = self
                    .ui_state
                    .settings_draft_mut()
                    .and_then(|draft| draft.row_mut(row.row_id))
                {
                    *target = *row;
                }
            }
            SettingsAction::EditOptions {
                timer_minutes,
                display,
            } => {
                if let Some(draft) = self.ui_state.settings_draft_mut() {
                    draft.timer_minutes = timer_minutes;
                    draft.display = display;
                }
            }
            SettingsAction::ApplyDecodedImage { row_id, data_uri } => {
                let applied = self
                    .ui_state
                    .settings_draft_mut()
                    .is_some_and(|draft| draft.apply_decoded_image(row_id, data_uri));
                if !applied {
                    log::info!("discarding picture for removed row {row_id}");
                }
            }
            SettingsAction::Commit => self.commit_settings(),
        }
    }

    fn open_settings(&mut self) {
        self.flush_text_edits();
        let app_state = self.app_state.as_ref();
        let draft =
            SettingsDraft::new(&app_state.tasks, app_state.timer_minutes, app_state.display);
        self.ui_state.active_modal = Some(ModalRequest::Settings(Box::new(draft)));
    }

    fn close_settings(&mut self) {
        self.ui_state.active_modal = None;
        self.ui_state.drop_target = None;
        self.ui_state.executor.cancel_all();
    }

    fn remove_row(&mut self, row_id: RowId) {
        if let Some(draft) = self.ui_state.settings_draft_mut() {
            draft.remove_row(row_id);
        }
        self.ui_state.executor.cancel(FlowKey::ImageImport(row_id));
        if self.ui_state.drop_target == Some(row_id) {
            self.ui_state.drop_target = None;
        }
    }

    fn commit_settings(&mut self) {
        let Some(ModalRequest::Settings(draft)) = self.ui_state.active_modal.take() else {
            return;
        };
        self.close_settings();
        self.ui_state.text_edits.clear();

        let commit = draft.commit(&self.app_state.as_ref().tasks);
        log::info!("saving settings with {} tasks", commit.tasks.len());
        *self.app_state.tasks_mut() = commit.tasks;
        if self.app_state.as_ref().display != commit.display {
            *self.app_state.display_mut() = commit.display;
        }
        if commit.timer_minutes > 0 && commit.timer_minutes != self.app_state.as_ref().timer_minutes
        {
            self.app_state.set_timer_minutes(commit.timer_minutes);
            self.reset_timer();
        }
        self.check_completion();
    }

    fn handle_ui(&mut self, action: UiAction) {
        match action {
            UiAction::EditTaskText { id, text } => {
                self.ui_state.text_edits.insert(id, text);
            }
            UiAction::ShowExtendForm => {
                if self.ui_state.expiry_prompt.is_some() {
                    self.ui_state.expiry_prompt = Some(ExpiryPrompt::Extend {
                        minutes: DEFAULT_EXTENSION_MINUTES.to_owned(),
                    });
                }
            }
            UiAction::EditExtendMinutes(text) => {
                if let Some(ExpiryPrompt::Extend { minutes }) = &mut self.ui_state.expiry_prompt {
                    *minutes = text;
                }
            }
            UiAction::ChooseImage(row_id) => {
                if platform::HAS_PICKER {
                    self.start_image_import(row_id, ImageSource::Picker);
                } else {
                    self.ui_state.drop_target = Some(row_id);
                }
            }
        }
    }

    fn start_image_import(&mut self, row_id: RowId, source: ImageSource) {
        if self.ui_state.drop_target == Some(row_id) {
            self.ui_state.drop_target = None;
        }
        if !self
            .ui_state
            .settings_draft()
            .is_some_and(|draft| draft.contains_row(row_id))
        {
            return;
        }
        flows::spawn_image_import_flow(&mut self.ui_state.executor, row_id, source);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dayboard_core::{LayoutMode, MemoryStore, PayloadKind, SoundEffect, TaskId};
    use dayboard_timer::Phase;

    use super::handle;
    use crate::{
        action::{
            Action, ActionRequestQueue, BoardAction, ExpiryPrompt, FlowAction, MemoAction,
            SettingsAction, TimerAction, UiAction,
        },
        flow_executor::FlowKey,
        image_import::ImageSource,
        state::{AppState, UiState},
    };

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn fresh() -> (AppState, UiState) {
        let app_state = AppState::load(&MemoryStore::new());
        let ui_state = UiState::new(&app_state);
        (app_state, ui_state)
    }

    fn run(app_state: &mut AppState, ui_state: &mut UiState, action: impl Into<Action>) {
        handle(app_state, ui_state, action.into());
    }

    fn task_ids(app_state: &AppState) -> Vec<TaskId> {
        app_state.tasks.iter().map(|task| task.id).collect()
    }

    fn run_countdown_out(app_state: &mut AppState, ui_state: &mut UiState) {
        run(app_state, ui_state, TimerAction::Toggle);
        let handle = app_state.countdown.live_handle().unwrap();
        for _ in 0..app_state.countdown.remaining_seconds() {
            run(app_state, ui_state, TimerAction::Tick(handle));
        }
    }

    #[test]
    fn checking_every_task_celebrates_once() {
        let (mut app_state, mut ui_state) = fresh();

        for id in task_ids(&app_state) {
            run(&mut app_state, &mut ui_state, BoardAction::SetDone { id, done: true });
        }

        // The first task starts done, so only seven success cues play.
        let sounds = ui_state.take_sounds();
        assert_eq!(
            sounds.iter().filter(|s| **s == SoundEffect::Success).count(),
            7
        );
        assert_eq!(sounds.last(), Some(&SoundEffect::Completion));
        assert!(ui_state.completion.is_celebrating());
        assert!(app_state.is_dirty());
    }

    #[test]
    fn unchecking_dismisses_and_reset_clears_everything() {
        let (mut app_state, mut ui_state) = fresh();
        for id in task_ids(&app_state) {
            run(&mut app_state, &mut ui_state, BoardAction::SetDone { id, done: true });
        }

        let first = task_ids(&app_state)[0];
        run(&mut app_state, &mut ui_state, BoardAction::SetDone { id: first, done: false });
        assert!(!ui_state.completion.is_celebrating());

        run(&mut app_state, &mut ui_state, BoardAction::SetDone { id: first, done: true });
        assert!(ui_state.completion.is_celebrating());
        run(&mut app_state, &mut ui_state, BoardAction::ResetAllDone);
        assert!(app_state.tasks.iter().all(|task| !task.done));
        assert!(!ui_state.completion.is_celebrating());
    }

    #[test]
    fn startup_check_celebrates_a_finished_list() {
        let (mut app_state, mut ui_state) = fresh();
        for id in task_ids(&app_state) {
            app_state.access().tasks_mut().set_done(id, true);
        }

        run(&mut app_state, &mut ui_state, BoardAction::CheckCompletion);
        assert_eq!(ui_state.take_sounds(), [SoundEffect::Completion]);
    }

    #[test]
    fn text_edit_commits_only_on_commit() {
        let (mut app_state, mut ui_state) = fresh();
        let id = task_ids(&app_state)[1];
        let mut store = MemoryStore::new();
        app_state.save_dirty(&mut store);

        run(
            &mut app_state,
            &mut ui_state,
            UiAction::EditTaskText {
                id,
                text: "公園".to_owned(),
            },
        );
        assert!(!app_state.is_dirty());
        assert_eq!(app_state.tasks.get(id).unwrap().payload.text(), "外遊び");

        run(
            &mut app_state,
            &mut ui_state,
            BoardAction::CommitText {
                id,
                text: "公園".to_owned(),
            },
        );
        assert!(ui_state.text_edits.is_empty());
        assert_eq!(app_state.tasks.get(id).unwrap().payload.text(), "公園");
        assert!(app_state.is_dirty());
    }

    #[test]
    fn memo_is_saved_on_every_edit() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, MemoAction::Replace("a".to_owned()));
        assert!(app_state.is_dirty());

        let mut store = MemoryStore::new();
        app_state.save_dirty(&mut store);
        run(&mut app_state, &mut ui_state, MemoAction::Replace("a".to_owned()));
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn expiry_plays_alarm_and_offers_choices() {
        let (mut app_state, mut ui_state) = fresh();
        run_countdown_out(&mut app_state, &mut ui_state);

        assert_eq!(app_state.countdown.phase(), Phase::Expired);
        assert_eq!(ui_state.take_sounds(), [SoundEffect::Alarm]);
        assert_eq!(ui_state.expiry_prompt, Some(ExpiryPrompt::Choices));

        run(&mut app_state, &mut ui_state, TimerAction::Reset);
        assert_eq!(ui_state.expiry_prompt, None);
        assert_eq!(app_state.countdown.phase(), Phase::Idle);
        assert_eq!(app_state.countdown.remaining_seconds(), 35 * 60);
    }

    #[test]
    fn extension_restarts_with_entered_minutes() {
        let (mut app_state, mut ui_state) = fresh();
        run_countdown_out(&mut app_state, &mut ui_state);
        run(&mut app_state, &mut ui_state, UiAction::ShowExtendForm);
        assert!(matches!(
            ui_state.expiry_prompt,
            Some(ExpiryPrompt::Extend { .. })
        ));

        for rejected in ["0", "-2", "soon"] {
            run(
                &mut app_state,
                &mut ui_state,
                UiAction::EditExtendMinutes(rejected.to_owned()),
            );
            run(&mut app_state, &mut ui_state, TimerAction::StartExtension);
            assert_eq!(app_state.countdown.phase(), Phase::Expired);
        }

        run(
            &mut app_state,
            &mut ui_state,
            UiAction::EditExtendMinutes(" 10 ".to_owned()),
        );
        run(&mut app_state, &mut ui_state, TimerAction::StartExtension);
        assert_eq!(app_state.countdown.phase(), Phase::Running);
        assert_eq!(app_state.countdown.remaining_seconds(), 600);
        assert_eq!(ui_state.expiry_prompt, None);
        assert_eq!(app_state.timer_minutes, 35);
    }

    #[test]
    fn stale_tick_after_pause_is_ignored() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, TimerAction::Toggle);
        let handle = app_state.countdown.live_handle().unwrap();
        run(&mut app_state, &mut ui_state, TimerAction::Toggle);

        run(&mut app_state, &mut ui_state, TimerAction::Tick(handle));
        assert_eq!(app_state.countdown.remaining_seconds(), 35 * 60);
    }

    #[test]
    fn settings_commit_after_deleting_first_row_keeps_done_flags() {
        let (mut app_state, mut ui_state) = fresh();
        let ids = task_ids(&app_state);
        run(&mut app_state, &mut ui_state, BoardAction::SetDone { id: ids[2], done: true });

        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let first_row = ui_state.settings_draft().unwrap().rows()[0].row_id;
        run(&mut app_state, &mut ui_state, SettingsAction::RemoveRow(first_row));
        run(&mut app_state, &mut ui_state, SettingsAction::Commit);

        assert!(ui_state.active_modal.is_none());
        assert_eq!(task_ids(&app_state), ids[1..]);
        let done: Vec<bool> = app_state.tasks.iter().map(|task| task.done).collect();
        assert_eq!(done, [false, true, false, false, false, false, false]);
    }

    #[test]
    fn closing_settings_discards_the_draft() {
        let (mut app_state, mut ui_state) = fresh();
        let before = app_state.tasks.clone();

        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        run(&mut app_state, &mut ui_state, SettingsAction::AddRow);
        assert_eq!(ui_state.settings_draft().unwrap().rows().len(), 9);
        run(&mut app_state, &mut ui_state, SettingsAction::Close);

        assert!(ui_state.active_modal.is_none());
        assert_eq!(app_state.tasks, before);
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn changed_duration_resets_timer_but_same_duration_does_not() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, TimerAction::Toggle);

        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        run(&mut app_state, &mut ui_state, SettingsAction::Commit);
        assert_eq!(app_state.countdown.phase(), Phase::Running);

        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let mut display = ui_state.settings_draft().unwrap().display;
        display.layout = LayoutMode::TimerOnly;
        run(
            &mut app_state,
            &mut ui_state,
            SettingsAction::EditOptions {
                timer_minutes: 20,
                display,
            },
        );
        run(&mut app_state, &mut ui_state, SettingsAction::Commit);

        assert_eq!(app_state.timer_minutes, 20);
        assert_eq!(app_state.countdown.phase(), Phase::Idle);
        assert_eq!(app_state.countdown.remaining_seconds(), 20 * 60);
        assert_eq!(app_state.display.layout, LayoutMode::TimerOnly);
    }

    #[test]
    fn commit_that_finishes_the_list_celebrates() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let keep = ui_state.settings_draft().unwrap().rows()[0].row_id;
        let others: Vec<_> = ui_state
            .settings_draft()
            .unwrap()
            .rows()
            .iter()
            .map(|row| row.row_id)
            .filter(|row_id| *row_id != keep)
            .collect();
        for row_id in others {
            run(&mut app_state, &mut ui_state, SettingsAction::RemoveRow(row_id));
        }
        run(&mut app_state, &mut ui_state, SettingsAction::Commit);

        assert_eq!(app_state.tasks.len(), 1);
        assert!(ui_state.completion.is_celebrating());
        assert_eq!(ui_state.take_sounds(), [SoundEffect::Completion]);
    }

    #[test]
    fn imported_picture_lands_on_its_row() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let mut row = ui_state.settings_draft().unwrap().rows()[3].clone();
        row.kind = PayloadKind::Image;
        let row_id = row.row_id;
        run(&mut app_state, &mut ui_state, SettingsAction::EditRow(Box::new(row)));

        run(
            &mut app_state,
            &mut ui_state,
            FlowAction::ImportImage {
                row_id,
                source: ImageSource::Bytes(Arc::from(PNG_HEADER)),
            },
        );
        let mut queue = ActionRequestQueue::default();
        ui_state.executor.poll(&mut queue);
        for action in queue.take_all() {
            handle(&mut app_state, &mut ui_state, action);
        }

        let row = &ui_state.settings_draft().unwrap().rows()[3];
        assert!(row.image_src.starts_with("data:image/png;base64,"));
        assert!(ui_state.executor.is_idle());
    }

    #[test]
    fn removing_a_row_cancels_its_import() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let row_id = ui_state.settings_draft().unwrap().rows()[1].row_id;

        run(
            &mut app_state,
            &mut ui_state,
            FlowAction::ImportImage {
                row_id,
                source: ImageSource::Bytes(Arc::from(PNG_HEADER)),
            },
        );
        assert!(ui_state.executor.is_running(FlowKey::ImageImport(row_id)));

        run(&mut app_state, &mut ui_state, SettingsAction::RemoveRow(row_id));
        assert!(ui_state.executor.is_idle());
        assert!(!ui_state.settings_draft().unwrap().contains_row(row_id));
    }

    #[test]
    fn picture_for_a_removed_row_is_discarded() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let row_id = ui_state.settings_draft().unwrap().rows()[1].row_id;
        run(&mut app_state, &mut ui_state, SettingsAction::RemoveRow(row_id));

        run(
            &mut app_state,
            &mut ui_state,
            SettingsAction::ApplyDecodedImage {
                row_id,
                data_uri: "data:image/png;base64,AA==".to_owned(),
            },
        );
        let draft = ui_state.settings_draft().unwrap();
        assert_eq!(draft.rows().len(), 7);
        assert!(draft.rows().iter().all(|row| row.image_src.is_empty()));
    }

    #[test]
    fn choosing_an_image_without_picker_waits_for_a_drop() {
        let (mut app_state, mut ui_state) = fresh();
        run(&mut app_state, &mut ui_state, SettingsAction::Open);
        let row_id = ui_state.settings_draft().unwrap().rows()[0].row_id;

        run(&mut app_state, &mut ui_state, UiAction::ChooseImage(row_id));
        assert_eq!(ui_state.drop_target, Some(row_id));

        run(&mut app_state, &mut ui_state, SettingsAction::Close);
        assert_eq!(ui_state.drop_target, None);
    }
}
