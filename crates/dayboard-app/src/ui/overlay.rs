//! Full-screen prompts shown over the board.

use eframe::egui::{Context, Id, Key, Modal, RichText, Sides, TextEdit};

use crate::action::{ActionRequestQueue, BoardAction, ExpiryPrompt, TimerAction, UiAction};

#[derive(Debug, Clone)]
pub(crate) struct OverlayViewModel {
    pub(crate) expiry: Option<ExpiryPrompt>,
    pub(crate) celebrating: bool,
}

impl OverlayViewModel {
    #[must_use]
    pub(crate) fn new(expiry: Option<ExpiryPrompt>, celebrating: bool) -> Self {
        Self {
            expiry,
            celebrating,
        }
    }
}

pub(crate) fn show(ctx: &Context, vm: &OverlayViewModel, action_queue: &mut ActionRequestQueue) {
    if let Some(prompt) = &vm.expiry {
        show_expiry(ctx, prompt, action_queue);
    }
    if vm.celebrating {
        show_completion(ctx, action_queue);
    }
}

// Both prompts ignore `should_close`: they are dismissed by their buttons only.
fn show_expiry(ctx: &Context, prompt: &ExpiryPrompt, action_queue: &mut ActionRequestQueue) {
    let _ = Modal::new(Id::new("expiry_overlay")).show(ctx, |ui| {
        ui.heading(RichText::new("⏰ Time's up!").size(36.0));
        ui.add_space(12.0);
        match prompt {
            ExpiryPrompt::Choices => {
                Sides::new().show(
                    ui,
                    |_ui| {},
                    |ui| {
                        if ui.button(RichText::new("➕ Extend").size(22.0)).clicked() {
                            action_queue.request(UiAction::ShowExtendForm.into());
                        }
                        if ui.button(RichText::new("↺ Reset").size(22.0)).clicked() {
                            action_queue.request(TimerAction::Reset.into());
                        }
                    },
                );
            }
            ExpiryPrompt::Extend { minutes } => {
                ui.horizontal(|ui| {
                    let mut text = minutes.clone();
                    let response = ui.add(
                        TextEdit::singleline(&mut text)
                            .id(Id::new("extend_minutes"))
                            .desired_width(60.0),
                    );
                    if response.changed() {
                        action_queue.request(UiAction::EditExtendMinutes(text).into());
                    }
                    ui.label("minutes");
                    let submitted =
                        response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));
                    if ui.button("▶ Start").clicked() || submitted {
                        action_queue.request(TimerAction::StartExtension.into());
                    }
                });
            }
        }
    });
}

fn show_completion(ctx: &Context, action_queue: &mut ActionRequestQueue) {
    let _ = Modal::new(Id::new("completion_overlay")).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🎉").size(64.0));
            ui.heading(RichText::new("All done! Great job!").size(32.0));
            ui.add_space(12.0);
            if ui.button(RichText::new("↺ Start over").size(22.0)).clicked() {
                action_queue.request(BoardAction::ResetAllDone.into());
            }
        });
    });
}
