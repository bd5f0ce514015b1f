//! Input events for a scroll view.
//!
//! Hosts that prefer one entry point can wrap every measurement, gesture and
//! command in a [`ScrollEvent`] and pass it to
//! [`ScrollView::handle`](crate::ScrollView::handle).

use serde::{Deserialize, Serialize};

use crate::command::ScrollCommand;

/// Inputs a scroll view can respond to.
///
/// Drag translations are measured from the start of the gesture, positive
/// downward. The `predicted` values are the release positions projected by
/// the input system's momentum estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrollEvent {
    /// Content or viewport size measured.
    Measured {
        content_height: f32,
        viewport_height: f32,
    },
    /// Content drag moved.
    ContentDragChanged { translation: f32 },
    /// Content drag released.
    ContentDragEnded { predicted: f32 },
    /// Thumb drag moved.
    ThumbDragChanged { translation: f32 },
    /// Thumb drag released.
    ThumbDragEnded { predicted: f32 },
    /// Programmatic scroll request.
    Command { command: ScrollCommand },
}

impl ScrollEvent {
    /// Whether this event ends a gesture.
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            ScrollEvent::ContentDragEnded { .. } | ScrollEvent::ThumbDragEnded { .. }
        )
    }
}
