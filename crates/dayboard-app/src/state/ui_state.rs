use std::collections::BTreeMap;

use dayboard_core::{CompletionWatcher, RowId, SettingsDraft, SoundEffect, TaskId, TaskIdGenerator};

use crate::{
    action::{ExpiryPrompt, ModalRequest},
    flow_executor::FlowExecutor,
    state::{AppState, PictureCache, Ticker},
};

/// Frame-to-frame state that is never persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) expiry_prompt: Option<ExpiryPrompt>,
    pub(crate) completion: CompletionWatcher,
    /// Uncommitted inline text edits on the main board.
    pub(crate) text_edits: BTreeMap<TaskId, String>,
    /// Row waiting for a dropped image file.
    pub(crate) drop_target: Option<RowId>,
    pub(crate) id_generator: TaskIdGenerator,
    pub(crate) executor: FlowExecutor,
    pub(crate) ticker: Ticker,
    pub(crate) pictures: PictureCache,
    sounds: Vec<SoundEffect>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(app_state: &AppState) -> Self {
        Self {
            active_modal: None,
            expiry_prompt: None,
            completion: CompletionWatcher::new(),
            text_edits: BTreeMap::new(),
            drop_target: None,
            id_generator: TaskIdGenerator::seeded(&app_state.tasks),
            executor: FlowExecutor::new(),
            ticker: Ticker::default(),
            pictures: PictureCache::default(),
            sounds: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn settings_draft(&self) -> Option<&SettingsDraft> {
        match &self.active_modal {
            Some(ModalRequest::Settings(draft)) => Some(draft),
            None => None,
        }
    }

    pub(crate) fn settings_draft_mut(&mut self) -> Option<&mut SettingsDraft> {
        match &mut self.active_modal {
            Some(ModalRequest::Settings(draft)) => Some(draft),
            None => None,
        }
    }

    pub(crate) fn queue_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    pub(crate) fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }
}
