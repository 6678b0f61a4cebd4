use dayboard_core::{DisplayConfig, DraftRow, LayoutMode, PayloadKind, RowMove, SettingsDraft};
use eframe::egui::{
    Button, ComboBox, Context, DragValue, Id, Image, Modal, RichText, ScrollArea, Sides, Spinner,
    TextEdit, Ui,
};

use crate::{
    action::{ActionRequestQueue, SettingsAction, UiAction},
    state::CachedPicture,
    ui::layout::{ROWS_MAX_HEIGHT, SETTINGS_WIDTH, THUMBNAIL_HEIGHT},
};

/// Progress of a picture import for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImportStatus {
    Idle,
    /// Waiting for a file to be dropped onto the window.
    AwaitingDrop,
    Reading,
}

#[derive(Debug, Clone)]
pub(crate) struct SettingsRowView<'a> {
    pub(crate) row: &'a DraftRow,
    pub(crate) import: ImportStatus,
    pub(crate) picture: Option<CachedPicture>,
}

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel<'a> {
    rows: Vec<SettingsRowView<'a>>,
    timer_minutes: u32,
    display: DisplayConfig,
    version: String,
}

impl<'a> SettingsViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        draft: &'a SettingsDraft,
        rows: Vec<SettingsRowView<'a>>,
        version: String,
    ) -> Self {
        Self {
            rows,
            timer_minutes: draft.timer_minutes,
            display: draft.display,
            version,
        }
    }
}

const MAX_TIMER_MINUTES: u32 = 999;

pub(crate) fn show(
    ctx: &Context,
    vm: &SettingsViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) {
    let modal = Modal::new(Id::new("settings")).show(ctx, |ui| {
        ui.set_width(SETTINGS_WIDTH);
        ui.heading("⚙ Settings");
        ui.add_space(4.0);

        ScrollArea::vertical()
            .id_salt("settings_rows")
            .max_height(ROWS_MAX_HEIGHT)
            .show(ui, |ui| {
                let last = vm.rows.len().saturating_sub(1);
                for (index, row) in vm.rows.iter().enumerate() {
                    show_row(ui, row, index == 0, index == last, action_queue);
                    ui.separator();
                }
            });
        if ui.button("➕ Add task").clicked() {
            action_queue.request(SettingsAction::AddRow.into());
        }

        ui.separator();
        show_options(ui, vm, action_queue);

        ui.add_space(8.0);
        Sides::new().show(
            ui,
            |ui| {
                ui.label(RichText::new(&vm.version).small().weak());
            },
            |ui| {
                if ui.button("Save").clicked() {
                    action_queue.request(SettingsAction::Commit.into());
                }
                if ui.button("Cancel").clicked() {
                    action_queue.request(SettingsAction::Close.into());
                }
            },
        );
    });
    if modal.should_close() {
        action_queue.request(SettingsAction::Close.into());
    }
}

fn show_row(
    ui: &mut Ui,
    view: &SettingsRowView<'_>,
    is_first: bool,
    is_last: bool,
    action_queue: &mut ActionRequestQueue,
) {
    let row_id = view.row.row_id;
    let icon_choices: Vec<String> = view
        .row
        .icon_choices()
        .into_iter()
        .map(str::to_owned)
        .collect();
    let mut row = view.row.clone();
    let mut changed = false;

    ui.horizontal(|ui| {
        if ui.add_enabled(!is_first, Button::new("⬆")).clicked() {
            action_queue.request(SettingsAction::MoveRow(row_id, RowMove::Up).into());
        }
        if ui.add_enabled(!is_last, Button::new("⬇")).clicked() {
            action_queue.request(SettingsAction::MoveRow(row_id, RowMove::Down).into());
        }

        changed |= ui
            .add(
                TextEdit::singleline(&mut row.time)
                    .id(Id::new(("draft_time", row_id)))
                    .hint_text("Time")
                    .desired_width(110.0),
            )
            .changed();

        ComboBox::from_id_salt(("draft_icon", row_id))
            .selected_text(RichText::new(&row.icon).size(20.0))
            .width(48.0)
            .show_ui(ui, |ui| {
                for choice in icon_choices {
                    let label = RichText::new(&choice).size(20.0);
                    changed |= ui.selectable_value(&mut row.icon, choice, label).changed();
                }
            });

        ComboBox::from_id_salt(("draft_kind", row_id))
            .selected_text(row.kind.label())
            .show_ui(ui, |ui| {
                for kind in PayloadKind::ALL {
                    changed |= ui.selectable_value(&mut row.kind, kind, kind.label()).changed();
                }
            });

        let hint = if row.kind.is_image() { "Caption" } else { "Task" };
        changed |= ui
            .add(
                TextEdit::singleline(&mut row.text)
                    .id(Id::new(("draft_text", row_id)))
                    .hint_text(hint)
                    .desired_width(240.0),
            )
            .changed();

        if ui.button("🗑").on_hover_text("Delete").clicked() {
            action_queue.request(SettingsAction::RemoveRow(row_id).into());
        }
    });

    if row.kind.is_image() {
        ui.horizontal(|ui| {
            ui.add_space(60.0);
            match view.import {
                ImportStatus::Reading => {
                    ui.add(Spinner::new());
                    ui.label("Reading picture...");
                }
                ImportStatus::AwaitingDrop => {
                    ui.label("Drop a picture file onto the window");
                }
                ImportStatus::Idle => {
                    if ui.button("🖼 Choose picture").clicked() {
                        action_queue.request(UiAction::ChooseImage(row_id).into());
                    }
                }
            }
            match &view.picture {
                Some(picture) => {
                    ui.add(
                        Image::from_bytes(picture.uri.clone(), picture.bytes.clone())
                            .max_height(THUMBNAIL_HEIGHT),
                    );
                }
                None if row.image_src.is_empty() => {
                    ui.label(RichText::new("No picture").weak());
                }
                None => {
                    ui.label(RichText::new("Picture cannot be shown").weak());
                }
            }
        });
    }

    if changed {
        action_queue.request(SettingsAction::EditRow(Box::new(row)).into());
    }
}

fn show_options(ui: &mut Ui, vm: &SettingsViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    let mut timer_minutes = vm.timer_minutes;
    let mut display = vm.display;
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("⏱ Timer");
        changed |= ui
            .add(
                DragValue::new(&mut timer_minutes)
                    .range(1..=MAX_TIMER_MINUTES)
                    .suffix(" min"),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        let DisplayConfig {
            show_number,
            show_time,
            show_memo,
            show_check,
            layout,
        } = &mut display;
        changed |= ui.checkbox(show_number, "Numbers").changed();
        changed |= ui.checkbox(show_time, "Times").changed();
        changed |= ui.checkbox(show_memo, "Memo").changed();
        changed |= ui.checkbox(show_check, "Checkboxes").changed();

        ui.separator();
        ComboBox::from_id_salt("layout_mode")
            .selected_text(layout.label())
            .show_ui(ui, |ui| {
                for mode in LayoutMode::ALL {
                    changed |= ui.selectable_value(layout, mode, mode.label()).changed();
                }
            });
    });

    if changed {
        action_queue.request(
            SettingsAction::EditOptions {
                timer_minutes,
                display,
            }
            .into(),
        );
    }
}
