//! Overlay indicator geometry and the thumb drag gesture.
//!
//! The thumb travels over `[0, viewport - thumb_height]` (screen space, positive
//! downward) while the content offset travels over `[-bound, 0]`. The two are
//! linked by a linear map in each direction:
//!
//! - forward: `thumb = -(travel * offset / bound)`
//! - inverse: `offset = -(bound * thumb / travel)`

use crate::constants::THUMB_REST_SCALE;
use crate::metrics::ContentMetrics;

// =============================================================================
// Thumb Geometry
// =============================================================================

/// Thumb height for the given metrics, never below `min_thumb_size`.
pub fn thumb_height(metrics: &ContentMetrics, min_thumb_size: f32) -> f32 {
    let proportional = if metrics.content_height > 0.0 {
        metrics.viewport_height * metrics.visible_ratio()
    } else {
        0.0
    };
    proportional.max(min_thumb_size)
}

/// Distance the thumb can travel inside the viewport.
///
/// Zero when the viewport is not taller than the thumb.
pub fn thumb_travel(viewport_height: f32, thumb_height: f32) -> f32 {
    (viewport_height - thumb_height).max(0.0)
}

/// Map a content offset onto a thumb offset.
pub fn thumb_offset_for_content(content_offset: f32, bound: f32, travel: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    -(travel * content_offset / bound)
}

/// Map a thumb offset back onto a content offset.
///
/// Returns None if the thumb cannot move or the content cannot scroll.
pub fn content_offset_for_thumb(thumb_offset: f32, bound: f32, travel: f32) -> Option<f32> {
    if bound <= 0.0 || travel <= 0.0 {
        return None;
    }
    Some(-(bound * thumb_offset / travel))
}

/// Settle a released thumb: pin to either end, otherwise map proportionally.
///
/// Returns None under the same conditions as [`content_offset_for_thumb`].
pub fn settle_thumb(proposed_thumb_offset: f32, bound: f32, travel: f32) -> Option<f32> {
    if proposed_thumb_offset.is_nan() || proposed_thumb_offset < 0.0 {
        content_offset_for_thumb(0.0, bound, travel).map(|_| 0.0)
    } else if proposed_thumb_offset > travel {
        content_offset_for_thumb(travel, bound, travel).map(|_| -bound)
    } else {
        content_offset_for_thumb(proposed_thumb_offset, bound, travel)
    }
}

// =============================================================================
// Thumb Drag
// =============================================================================

/// Scroll thumb drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThumbDragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging the thumb, with the thumb offset where the drag started
    Dragging { start_offset: f32 },
}

impl ThumbDragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, ThumbDragState::Dragging { .. })
    }

    /// Get the start offset if dragging
    pub fn start_offset(&self) -> Option<f32> {
        match self {
            ThumbDragState::Dragging { start_offset } => Some(*start_offset),
            ThumbDragState::Idle => None,
        }
    }

    /// Start dragging from the given thumb offset
    pub fn start_drag(&mut self, offset: f32) {
        *self = ThumbDragState::Dragging {
            start_offset: offset,
        };
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = ThumbDragState::Idle;
    }
}

/// Per-gesture state of the thumb. Position is derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorState {
    pub(crate) drag: ThumbDragState,
    /// Displacement of the thumb drag in progress
    pub(crate) thumb_drag_delta: f32,
    pub(crate) scale: f32,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            drag: ThumbDragState::Idle,
            thumb_drag_delta: 0.0,
            scale: THUMB_REST_SCALE,
        }
    }
}

impl IndicatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current thumb scale (1 at rest).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn thumb_drag_delta(&self) -> f32 {
        self.thumb_drag_delta
    }

    /// Feed a thumb drag displacement and return the proposed thumb offset.
    ///
    /// The first call of a gesture anchors it at `rest_offset`.
    pub fn apply_drag(&mut self, delta: f32, rest_offset: f32, drag_scale: f32) -> f32 {
        let start = match self.drag.start_offset() {
            Some(start) => start,
            None => {
                self.drag.start_drag(rest_offset);
                rest_offset
            }
        };
        self.thumb_drag_delta = delta;
        self.scale = drag_scale.max(THUMB_REST_SCALE);
        start + delta
    }

    /// Finish the gesture and return the proposed final thumb offset.
    ///
    /// A release without any prior change event is anchored at `rest_offset`.
    pub fn end_drag(&mut self, predicted_delta: f32, rest_offset: f32) -> f32 {
        let start = self.drag.start_offset().unwrap_or(rest_offset);
        self.reset();
        start + predicted_delta
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.drag.stop_drag();
        self.thumb_drag_delta = 0.0;
        self.scale = THUMB_REST_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MIN_THUMB_SIZE, THUMB_DRAG_SCALE};

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_thumb_height_proportional() {
        let metrics = ContentMetrics::new(1000.0, 500.0);
        assert!(approx_eq(thumb_height(&metrics, MIN_THUMB_SIZE), 250.0));
    }

    #[test]
    fn test_thumb_height_minimum_for_long_content() {
        let metrics = ContentMetrics::new(50_000.0, 500.0);
        // 500 * 500 / 50000 = 5, raised to the minimum
        assert_eq!(thumb_height(&metrics, MIN_THUMB_SIZE), MIN_THUMB_SIZE);

        for ratio in [1.5_f32, 10.0, 100.0, 1000.0] {
            let metrics = ContentMetrics::new(500.0 * ratio, 500.0);
            assert!(thumb_height(&metrics, MIN_THUMB_SIZE) >= MIN_THUMB_SIZE);
        }
    }

    #[test]
    fn test_thumb_height_fitting_content_spans_viewport() {
        let metrics = ContentMetrics::new(300.0, 500.0);
        assert_eq!(thumb_height(&metrics, MIN_THUMB_SIZE), 500.0);
    }

    #[test]
    fn test_thumb_height_empty_content() {
        let metrics = ContentMetrics::new(0.0, 500.0);
        assert_eq!(thumb_height(&metrics, MIN_THUMB_SIZE), MIN_THUMB_SIZE);
    }

    #[test]
    fn test_thumb_travel_floor() {
        assert_eq!(thumb_travel(500.0, 250.0), 250.0);
        assert_eq!(thumb_travel(30.0, MIN_THUMB_SIZE), 0.0);
    }

    #[test]
    fn test_forward_map() {
        // bound 500, travel 250
        assert!(approx_eq(thumb_offset_for_content(0.0, 500.0, 250.0), 0.0));
        assert!(approx_eq(thumb_offset_for_content(-250.0, 500.0, 250.0), 125.0));
        assert!(approx_eq(thumb_offset_for_content(-500.0, 500.0, 250.0), 250.0));
        assert_eq!(thumb_offset_for_content(-10.0, 0.0, 250.0), 0.0);
    }

    #[test]
    fn test_round_trip() {
        let bound = 9_500.0;
        let travel = 456.0;
        for step in 0..=20 {
            let offset = -bound * step as f32 / 20.0;
            let thumb = thumb_offset_for_content(offset, bound, travel);
            let back = content_offset_for_thumb(thumb, bound, travel).unwrap();
            assert!((back - offset).abs() < 0.01, "{offset} -> {thumb} -> {back}");
        }
    }

    #[test]
    fn test_inverse_map_disabled() {
        assert_eq!(content_offset_for_thumb(10.0, 0.0, 250.0), None);
        assert_eq!(content_offset_for_thumb(10.0, 500.0, 0.0), None);
    }

    #[test]
    fn test_settle_thumb_pins_ends() {
        assert_eq!(settle_thumb(-30.0, 500.0, 250.0), Some(0.0));
        assert_eq!(settle_thumb(400.0, 500.0, 250.0), Some(-500.0));
        let mid = settle_thumb(100.0, 500.0, 250.0).unwrap();
        assert!(approx_eq(mid, -200.0));
        assert_eq!(settle_thumb(100.0, 500.0, 0.0), None);
    }

    #[test]
    fn test_thumb_drag_anchors_at_start() {
        let mut state = IndicatorState::new();

        let proposed = state.apply_drag(20.0, 100.0, THUMB_DRAG_SCALE);
        assert!(state.is_dragging());
        assert_eq!(state.scale(), THUMB_DRAG_SCALE);
        assert_eq!(proposed, 120.0);

        // Later rest offsets do not move the anchor
        let proposed = state.apply_drag(50.0, 120.0, THUMB_DRAG_SCALE);
        assert_eq!(proposed, 150.0);

        let released = state.end_drag(70.0, 150.0);
        assert_eq!(released, 170.0);
        assert!(!state.is_dragging());
        assert_eq!(state.scale(), THUMB_REST_SCALE);
        assert_eq!(state.thumb_drag_delta(), 0.0);
    }

    #[test]
    fn test_thumb_release_without_change() {
        let mut state = IndicatorState::new();
        assert_eq!(state.end_drag(15.0, 40.0), 55.0);
    }
}
