//! Offset engine: settled scroll offset plus the transient delta of a content drag.
//!
//! Offsets are signed: 0 is the top, `-bound` is fully scrolled. The settled
//! offset only leaves `[-bound, 0]` while a thumb drag is in flight; every
//! commit and programmatic scroll lands back inside the range.

/// Clamp a candidate offset into `[-bound, 0]`.
///
/// A bound of 0 (content fits) forces the offset to 0.
pub fn clamp_offset(candidate: f32, bound: f32) -> f32 {
    if bound <= 0.0 || candidate.is_nan() || candidate > 0.0 {
        0.0
    } else if -candidate > bound {
        -bound
    } else {
        candidate
    }
}

/// Scroll position of a single viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Settled offset (0 = top, negative = scrolled down)
    pub(crate) offset: f32,
    /// Unclamped displacement of the content drag in progress
    pub(crate) drag_delta: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settled offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Transient content drag displacement.
    pub fn drag_delta(&self) -> f32 {
        self.drag_delta
    }

    /// Offset presented to the renderer. May overshoot while dragging.
    pub fn displayed_offset(&self) -> f32 {
        self.offset + self.drag_delta
    }

    /// Check if a content drag is displacing the view
    pub fn is_dragging(&self) -> bool {
        self.drag_delta != 0.0
    }

    /// Record the current displacement of a content drag.
    ///
    /// Nothing is recorded while the content fits (`bound == 0`).
    pub fn apply_drag_delta(&mut self, delta: f32, bound: f32) {
        self.drag_delta = if bound > 0.0 && delta.is_finite() {
            delta
        } else {
            0.0
        };
    }

    /// Settle a content drag using the momentum-projected displacement.
    pub fn commit_drag(&mut self, predicted_delta: f32, bound: f32) {
        self.drag_delta = 0.0;
        let predicted = if predicted_delta.is_nan() {
            0.0
        } else {
            predicted_delta
        };
        self.offset = clamp_offset(self.offset + predicted, bound);
    }

    pub fn scroll_to_top(&mut self) {
        self.drag_delta = 0.0;
        self.offset = 0.0;
    }

    pub fn scroll_to_bottom(&mut self, bound: f32) {
        self.drag_delta = 0.0;
        self.offset = -bound.max(0.0);
    }

    /// Scroll so that `y` units of content lie above the viewport.
    ///
    /// `y` is clamped into `[0, bound]` before it is applied.
    pub fn scroll_to(&mut self, y: f32, bound: f32) {
        let bound = bound.max(0.0);
        let y = if y.is_nan() { 0.0 } else { y.clamp(0.0, bound) };
        self.drag_delta = 0.0;
        self.offset = -y;
    }

    /// Move the settled offset directly, bypassing clamping.
    ///
    /// Used by the thumb drag, which settles through its own pinning rules.
    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Re-apply the bound after the metrics changed.
    pub(crate) fn reclamp(&mut self, bound: f32) {
        self.offset = clamp_offset(self.offset, bound);
        if bound <= 0.0 {
            self.drag_delta = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND: f32 = 500.0;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(10.0, BOUND), 0.0);
        assert_eq!(clamp_offset(-200.0, BOUND), -200.0);
        assert_eq!(clamp_offset(-800.0, BOUND), -BOUND);
        assert_eq!(clamp_offset(-200.0, 0.0), 0.0);
        assert_eq!(clamp_offset(f32::NAN, BOUND), 0.0);
    }

    #[test]
    fn test_drag_overshoots_until_commit() {
        let mut state = ScrollState::new();
        state.apply_drag_delta(120.0, BOUND);

        assert!(state.is_dragging());
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.displayed_offset(), 120.0);

        state.commit_drag(150.0, BOUND);
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_commit_uses_predicted_delta() {
        let mut state = ScrollState::new();
        state.apply_drag_delta(-100.0, BOUND);
        state.commit_drag(-260.0, BOUND);
        assert_eq!(state.offset(), -260.0);
        assert_eq!(state.drag_delta(), 0.0);
    }

    #[test]
    fn test_commit_clamps_past_bottom() {
        let mut state = ScrollState::new();
        state.commit_drag(-300.0, BOUND);
        state.commit_drag(-900.0, BOUND);
        assert_eq!(state.offset(), -BOUND);
    }

    #[test]
    fn test_commit_infinite_fling() {
        let mut state = ScrollState::new();
        state.scroll_to(200.0, BOUND);

        state.commit_drag(f32::NEG_INFINITY, BOUND);
        assert_eq!(state.offset(), -BOUND);

        state.commit_drag(f32::INFINITY, BOUND);
        assert_eq!(state.offset(), 0.0);

        // NaN leaves the offset where it was
        state.scroll_to(200.0, BOUND);
        state.commit_drag(f32::NAN, BOUND);
        assert_eq!(state.offset(), -200.0);
    }

    #[test]
    fn test_no_scrolling_when_content_fits() {
        let mut state = ScrollState::new();
        state.apply_drag_delta(-80.0, 0.0);
        assert_eq!(state.displayed_offset(), 0.0);

        state.commit_drag(-80.0, 0.0);
        assert_eq!(state.offset(), 0.0);

        state.scroll_to_bottom(0.0);
        assert_eq!(state.offset(), 0.0);

        state.scroll_to(40.0, 0.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_programmatic_scrolls() {
        let mut state = ScrollState::new();

        state.scroll_to_bottom(BOUND);
        assert_eq!(state.offset(), -BOUND);

        state.scroll_to_top();
        assert_eq!(state.offset(), 0.0);

        state.scroll_to(120.0, BOUND);
        assert_eq!(state.offset(), -120.0);

        state.scroll_to(-5.0, BOUND);
        assert_eq!(state.offset(), 0.0);

        state.scroll_to(700.0, BOUND);
        assert_eq!(state.offset(), -BOUND);
    }

    #[test]
    fn test_programmatic_scroll_cancels_drag_delta() {
        let mut state = ScrollState::new();
        state.apply_drag_delta(-40.0, BOUND);
        state.scroll_to(100.0, BOUND);
        assert!(!state.is_dragging());
        assert_eq!(state.displayed_offset(), -100.0);
    }

    #[test]
    fn test_reclamp_after_content_shrinks() {
        let mut state = ScrollState::new();
        state.scroll_to_bottom(BOUND);

        state.reclamp(200.0);
        assert_eq!(state.offset(), -200.0);

        state.apply_drag_delta(-30.0, 200.0);
        state.reclamp(0.0);
        assert_eq!(state.displayed_offset(), 0.0);
    }
}
