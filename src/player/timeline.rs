// SPDX-License-Identifier: MPL-2.0
//! Timeline geometry: mapping pointer positions to media time.
//!
//! All coordinates are in the same space as the pointer (window pixels).

use super::time_format::format_time;

/// Horizontal extent of the seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    /// Left edge of the bar.
    pub left: f32,
    /// Width of the bar.
    pub width: f32,
}

impl BarGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the bar covered up to `x`, clamped to `[0, 1]`.
    ///
    /// A bar without width maps every pointer to `0`.
    #[must_use]
    pub fn fraction_at(&self, x: f32) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 || !x.is_finite() {
            return 0.0;
        }
        f64::from((x - self.left) / self.width).clamp(0.0, 1.0)
    }

    /// Pixels of the bar covered up to `x`, clamped to the bar.
    #[must_use]
    pub fn offset_at(&self, x: f32) -> f32 {
        if self.width.is_nan() || self.width <= 0.0 || !x.is_finite() {
            return 0.0;
        }
        (x - self.left).clamp(0.0, self.width)
    }
}

/// A pointer over the seek bar, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Pointer X coordinate.
    pub x: f32,
    /// Geometry of the bar under the pointer.
    pub bar: BarGeometry,
    /// Rendered width of the hint tooltip, used to center it.
    pub hint_width: f32,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f32, bar: BarGeometry, hint_width: f32) -> Self {
        Self { x, bar, hint_width }
    }
}

/// Converts a pointer X coordinate into a media time.
///
/// Saturates at `0` and `duration` at the bar edges. An unknown or
/// non-positive duration maps to `0`.
#[must_use]
pub fn time_from_pointer(x: f32, bar: BarGeometry, duration: Option<f64>) -> f64 {
    match duration {
        Some(duration) if duration.is_finite() && duration > 0.0 => {
            bar.fraction_at(x) * duration
        }
        _ => 0.0,
    }
}

/// Hover or scrub preview: a filled width plus a centered time tooltip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Preview {
    /// Width of the filled bar in pixels.
    pub width_px: f32,
    /// Tooltip text (`M:SS`).
    pub hint_text: String,
    /// Tooltip offset from the bar's left edge in pixels.
    pub hint_left_px: f32,
}

impl Preview {
    /// Computes the preview for `pointer`.
    #[must_use]
    pub fn at(pointer: &PointerPosition, duration: Option<f64>) -> Self {
        let time = time_from_pointer(pointer.x, pointer.bar, duration);
        Self {
            width_px: pointer.bar.offset_at(pointer.x),
            hint_text: format_time(time),
            hint_left_px: pointer.x - (pointer.bar.left + pointer.hint_width / 2.0),
        }
    }
}

/// Scrub interaction state of the seek bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubState {
    dragging: bool,
}

impl ScrubState {
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON, F64_EPSILON};

    const BAR: BarGeometry = BarGeometry {
        left: 100.0,
        width: 400.0,
    };

    #[test]
    fn middle_of_bar_maps_to_half_duration() {
        assert_abs_diff_eq!(
            time_from_pointer(300.0, BAR, Some(120.0)),
            60.0,
            epsilon = F64_EPSILON
        );
    }

    #[test]
    fn pointer_saturates_at_bar_edges() {
        assert_abs_diff_eq!(time_from_pointer(0.0, BAR, Some(120.0)), 0.0);
        assert_abs_diff_eq!(time_from_pointer(900.0, BAR, Some(120.0)), 120.0);
    }

    #[test]
    fn time_is_monotonic_in_x() {
        let mut previous = f64::MIN;
        for step in 0..=120 {
            let x = 50.0 + step as f32 * 4.5;
            let time = time_from_pointer(x, BAR, Some(93.0));
            assert!(time >= previous, "time went backwards at x = {x}");
            previous = time;
        }
    }

    #[test]
    fn degenerate_inputs_map_to_zero() {
        assert_abs_diff_eq!(time_from_pointer(300.0, BAR, None), 0.0);
        assert_abs_diff_eq!(time_from_pointer(300.0, BAR, Some(f64::NAN)), 0.0);
        assert_abs_diff_eq!(
            time_from_pointer(300.0, BarGeometry::new(100.0, 0.0), Some(60.0)),
            0.0
        );
    }

    #[test]
    fn preview_centers_hint_on_pointer() {
        let pointer = PointerPosition::new(300.0, BAR, 40.0);
        let preview = Preview::at(&pointer, Some(120.0));

        assert_abs_diff_eq!(preview.width_px, 200.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(preview.hint_left_px, 180.0, epsilon = F32_EPSILON);
        assert_eq!(preview.hint_text, "1:00");
    }

    #[test]
    fn preview_width_stays_on_bar() {
        let pointer = PointerPosition::new(20.0, BAR, 40.0);
        assert_abs_diff_eq!(Preview::at(&pointer, Some(10.0)).width_px, 0.0);
    }

    #[test]
    fn scrub_state_toggles() {
        let mut scrub = ScrubState::default();
        assert!(!scrub.is_dragging());
        scrub.begin();
        assert!(scrub.is_dragging());
        scrub.end();
        assert!(!scrub.is_dragging());
    }
}
