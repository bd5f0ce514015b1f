//! Scripted sessions: timed messages replayed against a [`ContentView`].
//!
//! A session file is a JSON object with a list of steps, each holding the
//! millisecond offset at which it happens and the message to send:
//!
//! ```json
//! { "steps": [
//!     { "at_ms": 0,    "message": { "kind": "scroll", "event": { "type": "content_drag_changed", "translation": -120.0 } } },
//!     { "at_ms": 40,   "message": { "kind": "scroll", "event": { "type": "content_drag_ended", "predicted": -180.0 } } },
//!     { "at_ms": 2100, "message": { "kind": "tick" } }
//! ] }
//! ```

use std::path::Path;
use std::time::Duration;

use scrollview_ui::{ScrollEvent, ScrollFrame};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::app::ContentView;
use crate::message::Message;

/// One timed message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionStep {
    /// Milliseconds since the start of the session
    pub at_ms: u64,
    pub message: Message,
}

/// The frame produced by a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    pub at_ms: u64,
    pub message: Message,
    pub frame: ScrollFrame,
}

/// An ordered list of timed messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub steps: Vec<SessionStep>,
}

impl Session {
    /// Parse and validate a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let session: Self = serde_json::from_str(json)?;
        session.validate()?;
        Ok(session)
    }

    /// Read a session file.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path)?;
        let session = Self::from_json(&json)?;
        log::info!("Loaded {} session steps from {:?}", session.steps.len(), path);
        Ok(session)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn validate(&self) -> Result<(), SessionError> {
        if self.steps.is_empty() {
            return Err(SessionError::Empty);
        }
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(SessionError::OutOfOrder { index: index + 1 });
            }
        }
        Ok(())
    }

    /// The demo the app ships with: drag the list, let the thumb fade, use
    /// both buttons, jump past the end, then drag the thumb itself.
    pub fn builtin() -> Self {
        use scrollview_ui::ScrollEvent as E;

        let scroll = |event: ScrollEvent| Message::Scroll { event };
        let steps = [
            (0, scroll(E::ContentDragChanged { translation: -60.0 })),
            (16, scroll(E::ContentDragChanged { translation: -120.0 })),
            (32, scroll(E::ContentDragEnded { predicted: -180.0 })),
            (1_000, Message::Tick),
            (2_100, Message::Tick),
            (2_500, Message::ScrollToBottom),
            (3_000, Message::ScrollToTop),
            (3_500, Message::ScrollTo { y: 700.0 }),
            (4_000, scroll(E::ThumbDragChanged { translation: -40.0 })),
            (4_016, scroll(E::ThumbDragChanged { translation: -90.0 })),
            (4_032, scroll(E::ThumbDragEnded { predicted: -200.0 })),
            (6_100, Message::Tick),
        ];

        Self {
            steps: steps
                .into_iter()
                .map(|(at_ms, message)| SessionStep { at_ms, message })
                .collect(),
        }
    }

    /// Send every step to `view`, treating `start` as time zero.
    ///
    /// Returns the frame rendered after each step.
    pub fn replay(&self, view: &mut ContentView, start: Instant) -> Vec<FrameRecord> {
        self.steps
            .iter()
            .map(|step| {
                let now = start + Duration::from_millis(step.at_ms);
                view.update(step.message, now);
                let frame = view.frame();
                log::trace!("{:>6} ms {:?} -> {:?}", step.at_ms, step.message, frame);
                FrameRecord {
                    at_ms: step.at_ms,
                    message: step.message,
                    frame,
                }
            })
            .collect()
    }
}

/// Errors that can occur when loading a session script.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// JSON parsing error
    #[error("Failed to parse session: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O error when reading the script
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Session has no steps")]
    Empty,

    /// A step happens before the one preceding it
    #[error("Step {index} is earlier than the step before it")]
    OutOfOrder { index: usize },
}
