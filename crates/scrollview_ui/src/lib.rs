//! scrollview_ui - State and geometry engine for a drag-scrolled viewport
//!
//! This crate keeps the offset of a vertically scrolled viewport within its
//! bound, maps it onto a draggable overlay thumb (and back), and decides when
//! the thumb should fade out. Rendering and layout measurement stay with the
//! host; it feeds measured sizes and gesture translations in and reads a
//! [`ScrollFrame`] out.

mod command;
mod config;
mod constants;
mod event;
mod indicator;
mod metrics;
mod offset;
mod state;
mod visibility;

pub use command::{CommandChannel, CommandSubscription, ScrollCommand};
pub use config::IndicatorConfig;
pub use constants::{HIDE_DELAY, MIN_THUMB_SIZE, THUMB_DRAG_SCALE};
pub use event::ScrollEvent;
pub use indicator::{
    content_offset_for_thumb, settle_thumb, thumb_height, thumb_offset_for_content, thumb_travel,
    IndicatorState, ThumbDragState,
};
pub use metrics::ContentMetrics;
pub use offset::{clamp_offset, ScrollState};
pub use state::{ActiveGesture, ScrollFrame, ScrollView, ThumbGeometry};
pub use visibility::{HideCheck, VisibilityController};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::command::{CommandChannel, ScrollCommand};
    pub use crate::config::IndicatorConfig;
    pub use crate::event::ScrollEvent;
    pub use crate::state::{ActiveGesture, ScrollFrame, ScrollView};
    pub use crate::visibility::HideCheck;
}
