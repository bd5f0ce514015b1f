//! Indicator configuration for customizable appearance and behavior.
//!
//! Centralizes the tunable values of the overlay thumb so hosts can load them
//! from a config file instead of relying on the hardcoded defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{HIDE_DELAY, MIN_THUMB_SIZE, THUMB_DRAG_SCALE, THUMB_REST_SCALE};

/// Configuration for the overlay scroll indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Whether the indicator is shown at all
    pub show_indicators: bool,
    /// Minimum thumb height
    pub min_thumb_size: f32,
    /// Thumb scale applied while the thumb is dragged
    pub drag_scale: f32,
    /// Inactivity window before the indicator hides, in milliseconds
    pub hide_delay_ms: u64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            show_indicators: true,
            min_thumb_size: MIN_THUMB_SIZE,
            drag_scale: THUMB_DRAG_SCALE,
            hide_delay_ms: HIDE_DELAY.as_millis() as u64,
        }
    }
}

impl IndicatorConfig {
    /// Create a new indicator configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the indicator.
    pub fn show_indicators(mut self, show: bool) -> Self {
        self.show_indicators = show;
        self
    }

    /// Set the minimum thumb height.
    pub fn min_thumb_size(mut self, size: f32) -> Self {
        self.min_thumb_size = size.max(0.0);
        self
    }

    /// Set the thumb scale used while dragging. Values below 1 are raised to 1.
    pub fn drag_scale(mut self, scale: f32) -> Self {
        self.drag_scale = scale.max(THUMB_REST_SCALE);
        self
    }

    /// Set the inactivity window before the indicator hides.
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Inactivity window as a `Duration`.
    pub fn hide_delay_duration(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}
