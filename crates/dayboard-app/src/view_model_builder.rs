use dayboard_core::{RowPayload, project_row};

use crate::{
    action::ModalRequest,
    flow_executor::FlowKey,
    state::{AppState, UiState},
    ui::{
        board::{BoardRowView, BoardViewModel},
        modal::{ImportStatus, ModalViewModel, SettingsRowView, SettingsViewModel},
        overlay::OverlayViewModel,
        timer::TimerViewModel,
    },
    version,
};

/// Projects every task, showing pending inline edits in place of the stored text.
#[must_use]
pub(crate) fn build_board_vm(app_state: &AppState, ui_state: &UiState) -> BoardViewModel {
    let rows = app_state
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let mut row = project_row(task, index);
            let picture = match &row.payload {
                RowPayload::Image { src, .. } => ui_state.pictures.get(src).cloned(),
                RowPayload::EditableText(_) => None,
            };
            if let (RowPayload::EditableText(text), Some(edit)) =
                (&mut row.payload, ui_state.text_edits.get(&task.id))
            {
                text.clone_from(edit);
            }
            BoardRowView { row, picture }
        })
        .collect();
    BoardViewModel::new(rows, app_state.display.style_toggles())
}

#[must_use]
pub(crate) fn build_timer_vm(app_state: &AppState) -> TimerViewModel {
    let countdown = &app_state.countdown;
    #[expect(clippy::cast_possible_truncation)]
    let fraction = countdown.progress_fraction() as f32;
    TimerViewModel::new(
        countdown.display(),
        fraction,
        countdown.toggle_label(),
        countdown.phase(),
    )
}

#[must_use]
pub(crate) fn build_overlay_vm(ui_state: &UiState) -> OverlayViewModel {
    OverlayViewModel::new(
        ui_state.expiry_prompt.clone(),
        ui_state.completion.is_celebrating(),
    )
}

#[must_use]
pub(crate) fn build_modal_vm(ui_state: &UiState) -> Option<ModalViewModel<'_>> {
    let ModalRequest::Settings(draft) = ui_state.active_modal.as_ref()?;
    let rows = draft
        .rows()
        .iter()
        .map(|row| {
            let import = if ui_state.executor.is_running(FlowKey::ImageImport(row.row_id)) {
                ImportStatus::Reading
            } else if ui_state.drop_target == Some(row.row_id) {
                ImportStatus::AwaitingDrop
            } else {
                ImportStatus::Idle
            };
            SettingsRowView {
                row,
                import,
                picture: ui_state.pictures.get(&row.image_src).cloned(),
            }
        })
        .collect();
    Some(ModalViewModel::Settings(SettingsViewModel::new(
        draft,
        rows,
        version::build_version(),
    )))
}
