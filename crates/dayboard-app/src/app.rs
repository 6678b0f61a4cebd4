//! Dayboard application shell.
//!
//! Each frame polls running flows, feeds countdown ticks and dropped files
//! into the action queue, paints the view models, handles the requested
//! actions, plays queued sound cues and writes changed entities back to
//! storage.

use std::time::Duration;

use dayboard_core::MemoryStore;
use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{Align, CentralPanel, Context, Layout, RichText, SidePanel, TextStyle, TopBottomPanel},
};

use crate::{
    action::{
        self, ActionRequestQueue, BoardAction, FlowAction, ModalRequest, SettingsAction,
        TimerAction,
    },
    image_import::ImageSource,
    persistence::{self, EframeStore},
    platform,
    state::{AppState, UiState},
    ui::{self, layout},
    view_model_builder,
};

#[derive(Debug)]
pub struct DayboardApp {
    app_state: AppState,
    ui_state: UiState,
}

impl DayboardApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx.style_mut(|style| {
            for (text_style, size) in [
                (TextStyle::Body, 20.0),
                (TextStyle::Button, 20.0),
                (TextStyle::Heading, 28.0),
            ] {
                if let Some(font) = style.text_styles.get_mut(&text_style) {
                    font.size = size;
                }
            }
        });

        let store = cc
            .storage
            .map_or_else(MemoryStore::new, persistence::snapshot);
        let mut app_state = AppState::load(&store);
        let mut ui_state = UiState::new(&app_state);
        action::handler::handle(
            &mut app_state,
            &mut ui_state,
            BoardAction::CheckCompletion.into(),
        );
        log::info!("loaded {} tasks", app_state.tasks.len());

        Self {
            app_state,
            ui_state,
        }
    }

    fn apply_fit_scale(ctx: &Context) {
        // Measure in unzoomed points so the zoom does not feed back into itself.
        let width = ctx.available_rect().width() * ctx.zoom_factor();
        let scale = layout::fit_scale(width);
        if (ctx.zoom_factor() - scale).abs() > 1e-3 {
            ctx.set_zoom_factor(scale);
        }
    }

    fn drive_countdown(&mut self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        let now = ctx.input(|input| input.time);
        let live = self.app_state.countdown.live_handle();
        let due = self.ui_state.ticker.poll(now, live);
        if let Some(handle) = live {
            for _ in 0..due {
                action_queue.request(TimerAction::Tick(handle).into());
            }
        }
        if let Some(wait) = self.ui_state.ticker.wait(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn accept_dropped_files(&self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        let Some(row_id) = self.ui_state.drop_target else {
            log::debug!("ignoring dropped file {}", file.name);
            return;
        };
        let source = if let Some(bytes) = file.bytes {
            ImageSource::Bytes(bytes)
        } else if let Some(path) = file.path {
            ImageSource::Path(path)
        } else {
            log::warn!("dropped file {} has neither path nor contents", file.name);
            return;
        };
        action_queue.request(FlowAction::ImportImage { row_id, source }.into());
    }

    fn refresh_pictures(&mut self, ctx: &Context) {
        let UiState {
            pictures,
            active_modal,
            ..
        } = &mut self.ui_state;
        let draft_sources: Vec<&str> = match active_modal {
            Some(ModalRequest::Settings(draft)) => draft
                .rows()
                .iter()
                .map(|row| row.image_src.as_str())
                .collect(),
            None => Vec::new(),
        };
        let task_sources = self
            .app_state
            .tasks
            .iter()
            .filter_map(|task| task.payload.image_src());
        for uri in pictures.refresh(task_sources.chain(draft_sources)) {
            ctx.forget_image(&uri);
        }
    }

    fn show_panels(&self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        let layout_mode = self.app_state.display.layout;
        let board_vm = view_model_builder::build_board_vm(&self.app_state, &self.ui_state);
        let timer_vm = view_model_builder::build_timer_vm(&self.app_state);
        let show_memo = self.app_state.display.show_memo && layout_mode.shows_tasks();

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📅 Dayboard");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(RichText::new("⚙").size(24.0)).clicked() {
                        action_queue.request(SettingsAction::Open.into());
                    }
                });
            });
        });

        if show_memo {
            TopBottomPanel::bottom("memo_panel").show(ctx, |ui| {
                ui::memo::show(ui, &self.app_state.memo, action_queue);
            });
        }

        match (layout_mode.shows_timer(), layout_mode.shows_tasks()) {
            (true, true) => {
                SidePanel::left("timer_panel")
                    .resizable(false)
                    .exact_width(layout::TIMER_PANEL_WIDTH)
                    .show(ctx, |ui| {
                        ui.add_space(16.0);
                        ui::timer::show(ui, &timer_vm, action_queue);
                    });
                CentralPanel::default().show(ctx, |ui| {
                    ui::board::show(ui, &board_vm, action_queue);
                });
            }
            (true, false) => {
                CentralPanel::default().show(ctx, |ui| {
                    ui.add_space(32.0);
                    ui::timer::show(ui, &timer_vm, action_queue);
                });
            }
            (false, _) => {
                CentralPanel::default().show(ctx, |ui| {
                    ui::board::show(ui, &board_vm, action_queue);
                });
            }
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.app_state.save_dirty(&mut EframeStore::new(&mut *storage));
            storage.flush();
        }
    }
}

impl App for DayboardApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        self.app_state.save_dirty(&mut EframeStore::new(storage));
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.executor.poll(&mut action_queue);
        Self::apply_fit_scale(ctx);
        self.drive_countdown(ctx, &mut action_queue);
        self.accept_dropped_files(ctx, &mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.refresh_pictures(ctx);
        self.show_panels(ctx, &mut action_queue);

        let overlay_vm = view_model_builder::build_overlay_vm(&self.ui_state);
        ui::overlay::show(ctx, &overlay_vm, &mut action_queue);

        if let Some(modal_vm) = view_model_builder::build_modal_vm(&self.ui_state) {
            ui::modal::show(ctx, &modal_vm, &mut action_queue);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        for effect in self.ui_state.take_sounds() {
            platform::play_sound(effect);
        }
        if !self.ui_state.executor.is_idle() {
            ctx.request_repaint();
        }

        self.apply_persistence(frame);
    }
}
