//! Sizing of the board.
//!
//! The board is laid out for a 1024 point wide window and zoomed out to fit
//! narrower ones.

/// Width the layout is designed for, in points.
pub(crate) const DESIGN_WIDTH: f32 = 1024.0;
/// Margin kept on each side of the board.
pub(crate) const SIDE_MARGIN: f32 = 20.0;
const MIN_SCALE: f32 = 0.3;

pub(crate) const TIMER_PANEL_WIDTH: f32 = 300.0;
pub(crate) const RING_DIAMETER: f32 = 220.0;
pub(crate) const NUMBER_BADGE_SIZE: f32 = 34.0;
pub(crate) const ROW_PICTURE_HEIGHT: f32 = 72.0;
pub(crate) const THUMBNAIL_HEIGHT: f32 = 40.0;
pub(crate) const SETTINGS_WIDTH: f32 = 760.0;
pub(crate) const ROWS_MAX_HEIGHT: f32 = 420.0;

/// Zoom factor that fits the board into a window `width` points wide.
#[must_use]
pub(crate) fn fit_scale(width: f32) -> f32 {
    if !width.is_finite() {
        return 1.0;
    }
    ((width - 2.0 * SIDE_MARGIN) / DESIGN_WIDTH).clamp(MIN_SCALE, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{DESIGN_WIDTH, MIN_SCALE, SIDE_MARGIN, fit_scale};

    #[test]
    fn wide_windows_are_not_enlarged() {
        assert!((fit_scale(1920.0) - 1.0).abs() < f32::EPSILON);
        assert!((fit_scale(DESIGN_WIDTH + 2.0 * SIDE_MARGIN) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn narrow_windows_shrink_proportionally() {
        let scale = fit_scale(552.0);
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tiny_or_bogus_widths_stay_usable() {
        assert!((fit_scale(10.0) - MIN_SCALE).abs() < f32::EPSILON);
        assert!((fit_scale(f32::NAN) - 1.0).abs() < f32::EPSILON);
    }
}
