//! Application-level constants for the scroll view demo.

/// Number of items in the demo list
pub const DEFAULT_ITEM_COUNT: usize = 11;

/// Height of one list row: padded label, divider and stack spacing
pub const DEFAULT_ITEM_HEIGHT: f32 = 58.0;

/// Height of the scrolling viewport below the button bar
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 400.0;
