use eframe::egui::{Id, TextEdit, Ui};

use crate::action::{ActionRequestQueue, MemoAction};

pub(crate) fn show(ui: &mut Ui, memo: &str, action_queue: &mut ActionRequestQueue) {
    ui.label("📝 Memo");
    let mut text = memo.to_owned();
    let response = ui.add(
        TextEdit::multiline(&mut text)
            .id(Id::new("memo"))
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        action_queue.request(MemoAction::Replace(text).into());
    }
}
