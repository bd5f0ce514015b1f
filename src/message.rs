//! Application message types for the scroll view demo.
//!
//! Every UI event and action is a message in the Elm architecture style, so
//! a whole session can be written down as JSON and replayed.

use scrollview_ui::ScrollEvent;
use serde::{Deserialize, Serialize};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    // Button bar
    /// "Scroll to top" pressed
    ScrollToTop,
    /// "Scroll to bottom" pressed
    ScrollToBottom,
    /// Jump so `y` units of content lie above the viewport
    ScrollTo { y: f32 },

    // Content
    /// Number of list items changed
    ItemsChanged { count: usize },
    /// Viewport was resized
    ViewportResized { height: f32 },

    // Scroll view input
    /// Gesture or measurement forwarded to the scroll view
    Scroll { event: ScrollEvent },

    /// Clock advanced with no input; fires due hide checks
    Tick,
}
