//! Centralized constants for scrollview_ui
//!
//! Default geometry and timing values shared by the engine and its config.

use std::time::Duration;

// =============================================================================
// Indicator Geometry
// =============================================================================

/// Minimum thumb height, so very long content still yields a usable target
pub const MIN_THUMB_SIZE: f32 = 44.0;

/// Thumb scale while it is being dragged
pub const THUMB_DRAG_SCALE: f32 = 1.5;

/// Thumb scale at rest
pub const THUMB_REST_SCALE: f32 = 1.0;

// =============================================================================
// Visibility
// =============================================================================

/// Inactivity window after which the indicator may hide
pub const HIDE_DELAY: Duration = Duration::from_secs(2);

/// Opacity of a visible indicator
pub const OPACITY_VISIBLE: f32 = 1.0;

/// Opacity of a hidden indicator
pub const OPACITY_HIDDEN: f32 = 0.0;
