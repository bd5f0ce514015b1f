//! The demo content view: a button bar above a scrolling list of items.
//!
//! The buttons talk to the scroll view only through a [`CommandChannel`], the
//! same way any external caller would. The list height is the sum of its item
//! heights and is re-measured whenever the items or the viewport change.

use scrollview_ui::{CommandChannel, ScrollFrame, ScrollView};
use web_time::Instant;

use crate::config::AppConfig;
use crate::message::Message;
use crate::scheduler::HideScheduler;

/// Main application state.
pub struct ContentView {
    /// Handle the button bar posts scroll requests on
    commands: CommandChannel,
    scroll: ScrollView,
    hide_checks: HideScheduler,
    item_heights: Vec<f32>,
    item_height: f32,
    viewport_height: f32,
}

impl ContentView {
    /// Build the view from configuration and take the first measurement.
    pub fn new(config: &AppConfig) -> Self {
        let commands = CommandChannel::new();
        let scroll = ScrollView::new(config.indicator).with_commands(&commands);
        let mut view = Self {
            commands,
            scroll,
            hide_checks: HideScheduler::new(),
            item_heights: vec![config.demo.item_height; config.demo.item_count],
            item_height: config.demo.item_height,
            viewport_height: config.demo.viewport_height,
        };
        view.measure();
        view
    }

    /// Caller-side command handle, for hosts that drive the view directly.
    pub fn commands(&self) -> &CommandChannel {
        &self.commands
    }

    pub fn scroll_view(&self) -> &ScrollView {
        &self.scroll
    }

    pub fn pending_hide_checks(&self) -> usize {
        self.hide_checks.pending()
    }

    /// Total list height, as the layout pass would report it.
    pub fn content_height(&self) -> f32 {
        self.item_heights.iter().sum()
    }

    pub fn item_count(&self) -> usize {
        self.item_heights.len()
    }

    /// Labels of the list rows.
    pub fn item_labels(&self) -> Vec<String> {
        (0..self.item_heights.len())
            .map(|index| format!("Item {}", index))
            .collect()
    }

    /// Handle a message at time `now`.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::ScrollToTop => self.commands.scroll_to_top(),
            Message::ScrollToBottom => self.commands.scroll_to_bottom(),
            Message::ScrollTo { y } => self.commands.scroll_to(y),
            Message::ItemsChanged { count } => {
                log::info!("List now has {} items", count);
                self.item_heights.resize(count, self.item_height);
                self.measure();
            }
            Message::ViewportResized { height } => {
                self.viewport_height = height;
                self.measure();
            }
            Message::Scroll { event } => {
                if let Some(check) = self.scroll.handle(event, now) {
                    self.hide_checks.schedule(check);
                } else if event.is_release() {
                    log::debug!("Release ignored: {:?}", event);
                }
            }
            Message::Tick => {}
        }

        // Observe the command channel once per update, like a frame callback
        let applied = self.scroll.drain_commands();
        if applied > 0 {
            log::debug!("Applied {} scroll command(s)", applied);
        }
        self.hide_checks.fire_due(&mut self.scroll, now);
    }

    /// Current render snapshot.
    pub fn frame(&self) -> ScrollFrame {
        self.scroll.frame()
    }

    fn measure(&mut self) {
        let content_height = self.content_height();
        self.scroll.apply_metrics(content_height, self.viewport_height);
    }
}
