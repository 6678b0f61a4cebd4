use eframe::egui::Context;

pub(crate) use self::settings::{ImportStatus, SettingsRowView, SettingsViewModel};
use crate::action::ActionRequestQueue;

mod settings;

#[derive(Debug, Clone)]
pub(crate) enum ModalViewModel<'a> {
    Settings(SettingsViewModel<'a>),
}

pub(crate) fn show(ctx: &Context, vm: &ModalViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    match vm {
        ModalViewModel::Settings(settings_vm) => settings::show(ctx, settings_vm, action_queue),
    }
}
