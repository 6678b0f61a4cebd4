use std::f32::consts::{FRAC_PI_2, TAU};

use dayboard_timer::Phase;
use eframe::egui::{
    Align2, Button, Color32, FontId, Painter, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2,
};

use crate::{
    action::{ActionRequestQueue, TimerAction},
    ui::layout::RING_DIAMETER,
};

const RING_STROKE: f32 = 14.0;
const RING_SEGMENTS: usize = 120;
const RING_COLOR: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee);
const EXPIRED_COLOR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);

#[derive(Debug, Clone)]
pub(crate) struct TimerViewModel {
    pub(crate) text: String,
    /// Remaining share of the run, in `0.0..=1.0`.
    pub(crate) fraction: f32,
    pub(crate) toggle_label: &'static str,
    pub(crate) phase: Phase,
}

impl TimerViewModel {
    #[must_use]
    pub(crate) fn new(
        text: String,
        fraction: f32,
        toggle_label: &'static str,
        phase: Phase,
    ) -> Self {
        Self {
            text,
            fraction,
            toggle_label,
            phase,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &TimerViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(RING_DIAMETER), Sense::hover());
        let color = if vm.phase.is_expired() {
            EXPIRED_COLOR
        } else {
            RING_COLOR
        };
        paint_ring(ui.painter(), rect.center(), vm.fraction, color, ui.visuals().faint_bg_color);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            &vm.text,
            FontId::monospace(RING_DIAMETER * 0.2),
            ui.visuals().strong_text_color(),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let button_size = Vec2::new(RING_DIAMETER / 2.0 - ui.spacing().item_spacing.x, 44.0);
            let toggle = ui.add_sized(
                button_size,
                Button::new(RichText::new(vm.toggle_label).size(24.0)),
            );
            if toggle.clicked() {
                action_queue.request(TimerAction::Toggle.into());
            }
            let reset = ui.add_sized(button_size, Button::new(RichText::new("↺").size(24.0)));
            if reset.on_hover_text("Reset").clicked() {
                action_queue.request(TimerAction::Reset.into());
            }
        });
    });
}

/// Paints the remaining share as an arc running clockwise from twelve o'clock.
fn paint_ring(painter: &Painter, center: Pos2, fraction: f32, color: Color32, track: Color32) {
    let radius = RING_DIAMETER * 0.45;
    painter.circle_stroke(center, radius, Stroke::new(RING_STROKE, track));

    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return;
    }
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let segments = ((RING_SEGMENTS as f32 * fraction).ceil() as usize).max(1);
    let sweep = TAU * fraction;
    let points = (0..=segments)
        .map(|i| {
            #[expect(clippy::cast_precision_loss)]
            let angle = -FRAC_PI_2 + sweep * (i as f32 / segments as f32);
            center + radius * Vec2::angled(angle)
        })
        .collect();
    painter.add(Shape::line(points, Stroke::new(RING_STROKE, color)));
}
