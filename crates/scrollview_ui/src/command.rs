//! Programmatic scroll requests from outside the view.
//!
//! The caller owns a [`CommandChannel`] and posts commands into it; the view
//! holds a [`CommandSubscription`], a weak handle that drains the queue when
//! the host asks it to. Each posted command is applied exactly once. If the
//! caller drops every handle to the channel, the subscription goes quiet and
//! programmatic scrolling is simply unavailable.
//!
//! # Example
//! ```
//! use scrollview_ui::{CommandChannel, ScrollView};
//!
//! let commands = CommandChannel::new();
//! let mut view = ScrollView::default().with_commands(&commands);
//! view.apply_metrics(1000.0, 500.0);
//!
//! commands.scroll_to_bottom();
//! assert_eq!(view.drain_commands(), 1);
//! assert_eq!(view.offset(), -500.0);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

type CommandQueue = RefCell<VecDeque<ScrollCommand>>;

/// A programmatic scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollCommand {
    /// Scroll to the top
    ToTop,
    /// Scroll to the bottom
    ToBottom,
    /// Scroll so `y` units of content lie above the viewport
    ToY { y: f32 },
}

/// Caller-side handle. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct CommandChannel {
    queue: Rc<CommandQueue>,
}

impl CommandChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a command for the view to apply.
    pub fn post(&self, command: ScrollCommand) {
        log::debug!("CommandChannel: posted {:?}", command);
        self.queue.borrow_mut().push_back(command);
    }

    pub fn scroll_to_top(&self) {
        self.post(ScrollCommand::ToTop);
    }

    pub fn scroll_to_bottom(&self) {
        self.post(ScrollCommand::ToBottom);
    }

    pub fn scroll_to(&self, y: f32) {
        self.post(ScrollCommand::ToY { y });
    }

    /// Number of commands not yet applied.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Create the view-side handle.
    pub fn subscribe(&self) -> CommandSubscription {
        CommandSubscription {
            queue: Rc::downgrade(&self.queue),
        }
    }
}

/// View-side weak handle onto a [`CommandChannel`].
#[derive(Debug, Clone)]
pub struct CommandSubscription {
    queue: Weak<CommandQueue>,
}

impl CommandSubscription {
    /// Whether the caller still holds the channel.
    pub fn is_connected(&self) -> bool {
        self.queue.strong_count() > 0
    }

    /// Take every pending command in posting order.
    pub fn drain(&self) -> Vec<ScrollCommand> {
        match self.queue.upgrade() {
            Some(queue) => queue.borrow_mut().drain(..).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_order_once() {
        let channel = CommandChannel::new();
        let subscription = channel.subscribe();

        channel.scroll_to_bottom();
        channel.scroll_to(120.0);
        channel.scroll_to_top();
        assert_eq!(channel.pending(), 3);

        assert_eq!(
            subscription.drain(),
            vec![
                ScrollCommand::ToBottom,
                ScrollCommand::ToY { y: 120.0 },
                ScrollCommand::ToTop,
            ]
        );
        assert_eq!(channel.pending(), 0);
        assert!(subscription.drain().is_empty());
    }

    #[test]
    fn test_clones_share_queue() {
        let channel = CommandChannel::new();
        let button = channel.clone();
        let subscription = channel.subscribe();

        button.scroll_to_top();
        assert_eq!(subscription.drain(), vec![ScrollCommand::ToTop]);
    }

    #[test]
    fn test_dropped_channel_disconnects() {
        let channel = CommandChannel::new();
        let subscription = channel.subscribe();
        channel.scroll_to_top();
        assert!(subscription.is_connected());

        drop(channel);
        assert!(!subscription.is_connected());
        assert!(subscription.drain().is_empty());
    }

    #[test]
    fn test_command_json_shape() {
        let command: ScrollCommand = serde_json::from_str(r#"{"kind":"to_y","y":42.0}"#).unwrap();
        assert_eq!(command, ScrollCommand::ToY { y: 42.0 });

        let json = serde_json::to_string(&ScrollCommand::ToBottom).unwrap();
        assert_eq!(json, r#"{"kind":"to_bottom"}"#);
    }
}
