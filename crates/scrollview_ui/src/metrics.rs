//! Measured content and viewport sizes, and the scroll bound derived from them.

/// Latest sizes reported by the layout collaborator.
///
/// Sizes are taken as measured; only non-finite values are replaced by 0 so
/// the derived bound always stays finite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMetrics {
    /// Total height of the scrolled content
    pub content_height: f32,
    /// Height of the visible viewport
    pub viewport_height: f32,
}

impl ContentMetrics {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            content_height: finite_or_zero(content_height),
            viewport_height: finite_or_zero(viewport_height),
        }
    }

    /// Store a new measurement.
    ///
    /// Returns true if the scroll bound changed, which is the signal for the
    /// owner to re-clamp its settled offset.
    pub fn update(&mut self, content_height: f32, viewport_height: f32) -> bool {
        let previous = self.bound();
        *self = Self::new(content_height, viewport_height);
        (self.bound() - previous).abs() > f32::EPSILON
    }

    /// Maximum scroll distance: `max(0, content - viewport)`.
    pub fn bound(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Whether the content overflows the viewport.
    pub fn can_scroll(&self) -> bool {
        self.bound() > 0.0
    }

    /// Fraction of the content that is visible, in `[0, 1]`.
    pub fn visible_ratio(&self) -> f32 {
        if self.content_height <= 0.0 {
            return 1.0;
        }
        (self.viewport_height / self.content_height).clamp(0.0, 1.0)
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
