//! Consolidated scroll view state.
//!
//! [`ScrollView`] owns the metrics, offset, indicator and visibility state of
//! one viewport and updates them through named transforms:
//! [`apply_metrics`](ScrollView::apply_metrics),
//! [`apply_drag`](ScrollView::apply_drag),
//! [`commit_drag`](ScrollView::commit_drag),
//! [`apply_thumb_drag`](ScrollView::apply_thumb_drag) and
//! [`commit_thumb_drag`](ScrollView::commit_thumb_drag).
//! The renderer reads a [`ScrollFrame`] after each update.
//!
//! Only one gesture drives the offset at a time. While a content drag is
//! active thumb input is ignored, and the other way around.

use serde::Serialize;
use web_time::Instant;

use crate::command::{CommandChannel, CommandSubscription, ScrollCommand};
use crate::config::IndicatorConfig;
use crate::event::ScrollEvent;
use crate::indicator::{self, IndicatorState};
use crate::metrics::ContentMetrics;
use crate::offset::ScrollState;
use crate::visibility::{HideCheck, VisibilityController};

/// Which gesture currently owns the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveGesture {
    #[default]
    Idle,
    /// Dragging the content itself
    Content,
    /// Dragging the indicator thumb
    Thumb,
}

/// Thumb geometry in viewport coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThumbGeometry {
    pub height: f32,
    /// Distance from the top of the viewport
    pub offset: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollFrame {
    /// Content offset to draw at (settled offset plus drag delta)
    pub offset: f32,
    pub thumb: ThumbGeometry,
    /// Whether the indicator may be drawn at all
    pub allow_indicators: bool,
}

/// State for one scrollable viewport.
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    config: IndicatorConfig,
    metrics: ContentMetrics,
    scroll: ScrollState,
    indicator: IndicatorState,
    visibility: VisibilityController,
    gesture: ActiveGesture,
    commands: Option<CommandSubscription>,
}

impl ScrollView {
    /// Create a view with the given indicator configuration.
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            visibility: VisibilityController::new().with_hide_delay(config.hide_delay_duration()),
            ..Self::default()
        }
    }

    /// Subscribe to programmatic scroll requests posted on `channel`.
    pub fn with_commands(mut self, channel: &CommandChannel) -> Self {
        self.commands = Some(channel.subscribe());
        self
    }

    /// Enable or disable the indicator.
    pub fn show_indicators(mut self, show: bool) -> Self {
        self.config.show_indicators = show;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn metrics(&self) -> &ContentMetrics {
        &self.metrics
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn indicator_state(&self) -> &IndicatorState {
        &self.indicator
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn active_gesture(&self) -> ActiveGesture {
        self.gesture
    }

    pub fn bound(&self) -> f32 {
        self.metrics.bound()
    }

    /// Settled offset.
    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Settled offset plus any content drag delta.
    pub fn displayed_offset(&self) -> f32 {
        self.scroll.displayed_offset()
    }

    pub fn thumb_height(&self) -> f32 {
        indicator::thumb_height(&self.metrics, self.config.min_thumb_size)
    }

    /// Distance the thumb can travel inside the viewport.
    pub fn thumb_travel(&self) -> f32 {
        indicator::thumb_travel(self.metrics.viewport_height, self.thumb_height())
    }

    /// Thumb offset from the top, following the displayed content offset.
    pub fn thumb_offset(&self) -> f32 {
        indicator::thumb_offset_for_content(
            self.scroll.displayed_offset(),
            self.bound(),
            self.thumb_travel(),
        )
    }

    /// The indicator is never drawn when the content fits the viewport.
    pub fn allow_indicators(&self) -> bool {
        self.config.show_indicators && self.metrics.can_scroll()
    }

    /// Snapshot for the renderer.
    pub fn frame(&self) -> ScrollFrame {
        ScrollFrame {
            offset: self.displayed_offset(),
            thumb: ThumbGeometry {
                height: self.thumb_height(),
                offset: self.thumb_offset(),
                scale: self.indicator.scale(),
                opacity: self.visibility.opacity(),
            },
            allow_indicators: self.allow_indicators(),
        }
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Store a new measurement and keep the settled offset within the bound.
    pub fn apply_metrics(&mut self, content_height: f32, viewport_height: f32) {
        if self.metrics.update(content_height, viewport_height) {
            let bound = self.bound();
            log::trace!(
                "ScrollView: content {} in viewport {}, bound {}",
                self.metrics.content_height,
                self.metrics.viewport_height,
                bound
            );
            self.scroll.reclamp(bound);
        }
    }

    /// Feed the current displacement of a content drag.
    pub fn apply_drag(&mut self, translation: f32, now: Instant) {
        if self.gesture == ActiveGesture::Thumb {
            log::trace!("ScrollView: content drag ignored during thumb drag");
            return;
        }
        if self.gesture == ActiveGesture::Idle {
            log::debug!("ScrollView: content drag started");
            self.gesture = ActiveGesture::Content;
        }
        self.scroll.apply_drag_delta(translation, self.bound());
        self.visibility.record_interaction(now);
    }

    /// Release a content drag with its momentum-projected displacement.
    ///
    /// Returns the hide check to fire once it is due.
    pub fn commit_drag(&mut self, predicted: f32, now: Instant) -> Option<HideCheck> {
        if self.gesture == ActiveGesture::Thumb {
            log::trace!("ScrollView: content release ignored during thumb drag");
            return None;
        }
        self.gesture = ActiveGesture::Idle;
        self.scroll.commit_drag(predicted, self.bound());
        log::debug!("ScrollView: content drag settled at {}", self.offset());
        Some(self.end_interaction(now))
    }

    /// Feed the current displacement of a thumb drag.
    ///
    /// Moves the content so the thumb follows the pointer.
    pub fn apply_thumb_drag(&mut self, translation: f32, now: Instant) {
        if self.gesture == ActiveGesture::Content {
            log::trace!("ScrollView: thumb drag ignored during content drag");
            return;
        }
        if !self.allow_indicators() {
            return;
        }
        if self.gesture == ActiveGesture::Idle {
            log::debug!("ScrollView: thumb drag started");
            self.gesture = ActiveGesture::Thumb;
        }

        let rest_offset = self.thumb_offset();
        let proposed = self
            .indicator
            .apply_drag(translation, rest_offset, self.config.drag_scale);
        if let Some(offset) =
            indicator::content_offset_for_thumb(proposed, self.bound(), self.thumb_travel())
        {
            self.scroll.set_offset(offset);
        }
        self.visibility.record_interaction(now);
    }

    /// Release a thumb drag, pinning thumb and content together at either end.
    ///
    /// Returns the hide check to fire once it is due.
    pub fn commit_thumb_drag(&mut self, predicted: f32, now: Instant) -> Option<HideCheck> {
        if self.gesture == ActiveGesture::Content {
            log::trace!("ScrollView: thumb release ignored during content drag");
            return None;
        }
        self.gesture = ActiveGesture::Idle;
        if !self.allow_indicators() {
            // A drag that lost its indicator mid-gesture still needs its hide check
            let was_dragging = self.indicator.is_dragging();
            self.indicator.reset();
            return was_dragging.then(|| self.end_interaction(now));
        }

        let rest_offset = self.thumb_offset();
        let proposed = self.indicator.end_drag(predicted, rest_offset);
        if let Some(offset) = indicator::settle_thumb(proposed, self.bound(), self.thumb_travel())
        {
            self.scroll.set_offset(offset);
        }
        log::debug!("ScrollView: thumb drag settled at {}", self.offset());
        Some(self.end_interaction(now))
    }

    fn end_interaction(&mut self, now: Instant) -> HideCheck {
        self.visibility.record_interaction(now);
        self.visibility.schedule_check(now)
    }

    // =========================================================================
    // Programmatic scrolling
    // =========================================================================

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to_bottom(self.bound());
    }

    /// Scroll so `y` units of content lie above the viewport, clamped to the bound.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll.scroll_to(y, self.bound());
    }

    pub fn apply_command(&mut self, command: ScrollCommand) {
        log::debug!("ScrollView: applying {:?}", command);
        match command {
            ScrollCommand::ToTop => self.scroll_to_top(),
            ScrollCommand::ToBottom => self.scroll_to_bottom(),
            ScrollCommand::ToY { y } => self.scroll_to(y),
        }
    }

    /// Apply every command pending on the subscribed channel.
    ///
    /// Returns the number of commands applied.
    pub fn drain_commands(&mut self) -> usize {
        let Some(subscription) = &self.commands else {
            return 0;
        };
        if !subscription.is_connected() {
            log::trace!("ScrollView: command channel dropped");
            return 0;
        }
        let pending = subscription.drain();
        let count = pending.len();
        for command in pending {
            self.apply_command(command);
        }
        count
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Fire a hide check previously returned by a release.
    ///
    /// Returns true if the indicator is hidden by this check.
    pub fn run_hide_check(&mut self, check: HideCheck, now: Instant) -> bool {
        self.visibility.run_check(check, now)
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Dispatch a single input event.
    ///
    /// Returns the hide check a release schedules, if any.
    pub fn handle(&mut self, event: ScrollEvent, now: Instant) -> Option<HideCheck> {
        match event {
            ScrollEvent::Measured {
                content_height,
                viewport_height,
            } => {
                self.apply_metrics(content_height, viewport_height);
                None
            }
            ScrollEvent::ContentDragChanged { translation } => {
                self.apply_drag(translation, now);
                None
            }
            ScrollEvent::ContentDragEnded { predicted } => self.commit_drag(predicted, now),
            ScrollEvent::ThumbDragChanged { translation } => {
                self.apply_thumb_drag(translation, now);
                None
            }
            ScrollEvent::ThumbDragEnded { predicted } => self.commit_thumb_drag(predicted, now),
            ScrollEvent::Command { command } => {
                self.apply_command(command);
                None
            }
        }
    }
}
