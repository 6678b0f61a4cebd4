use dayboard_core::{BoardRow, RowPayload, StyleToggles};
use eframe::egui::{
    Align2, Color32, FontId, Grid, Id, Image, RichText, ScrollArea, Sense, Stroke, TextEdit, Ui,
    Vec2,
};

use crate::{
    action::{ActionRequestQueue, BoardAction, UiAction},
    state::CachedPicture,
    ui::layout::{NUMBER_BADGE_SIZE, ROW_PICTURE_HEIGHT},
};

#[derive(Debug, Clone)]
pub(crate) struct BoardRowView {
    pub(crate) row: BoardRow,
    /// Decoded picture for image rows.
    pub(crate) picture: Option<CachedPicture>,
}

#[derive(Debug, Clone)]
pub(crate) struct BoardViewModel {
    pub(crate) rows: Vec<BoardRowView>,
    pub(crate) toggles: StyleToggles,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(rows: Vec<BoardRowView>, toggles: StyleToggles) -> Self {
        Self { rows, toggles }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    ScrollArea::vertical().id_salt("board").show(ui, |ui| {
        Grid::new("board_rows")
            .striped(true)
            .spacing([14.0, 12.0])
            .show(ui, |ui| {
                for row in &vm.rows {
                    show_row(ui, row, vm.toggles, action_queue);
                    ui.end_row();
                }
            });
    });
}

fn show_row(
    ui: &mut Ui,
    view: &BoardRowView,
    toggles: StyleToggles,
    action_queue: &mut ActionRequestQueue,
) {
    let row = &view.row;

    if !toggles.contains(StyleToggles::HIDE_NUMBERS) {
        number_badge(ui, row.number, row.number_color);
    }
    if !toggles.contains(StyleToggles::HIDE_TIMES) {
        ui.label(RichText::new(&row.time).monospace());
    }
    ui.label(RichText::new(&row.icon).size(30.0));

    match &row.payload {
        RowPayload::EditableText(text) => {
            let mut text = text.clone();
            let response = ui.add(
                TextEdit::singleline(&mut text)
                    .id(Id::new(("task_text", row.id)))
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                action_queue.request(
                    UiAction::EditTaskText {
                        id: row.id,
                        text: text.clone(),
                    }
                    .into(),
                );
            }
            if response.lost_focus() {
                action_queue.request(BoardAction::CommitText { id: row.id, text }.into());
            }
        }
        RowPayload::Image { alt, .. } => match &view.picture {
            Some(picture) => {
                ui.add(
                    Image::from_bytes(picture.uri.clone(), picture.bytes.clone())
                        .max_height(ROW_PICTURE_HEIGHT)
                        .maintain_aspect_ratio(true),
                )
                .on_hover_text(alt);
            }
            None => {
                ui.label(RichText::new(alt).italics());
            }
        },
    }

    if !toggles.contains(StyleToggles::HIDE_CHECKS) {
        let mut done = row.done;
        if ui.checkbox(&mut done, "").changed() {
            action_queue.request(BoardAction::SetDone { id: row.id, done }.into());
        }
    }
}

fn number_badge(ui: &mut Ui, number: usize, [r, g, b]: [u8; 3]) {
    let color = Color32::from_rgb(r, g, b);
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(NUMBER_BADGE_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.circle_stroke(
        rect.center(),
        NUMBER_BADGE_SIZE / 2.0 - 2.0,
        Stroke::new(3.0, color),
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        number.to_string(),
        FontId::proportional(NUMBER_BADGE_SIZE * 0.5),
        ui.visuals().strong_text_color(),
    );
}

