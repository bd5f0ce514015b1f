//! scrollview - Demo host for the `scrollview_ui` engine
//!
//! A list of items inside a drag-scrolled viewport, with a button bar that
//! scrolls it through a command channel. Input arrives as timed messages so a
//! whole session can be scripted in JSON and replayed headless.

mod app;
pub mod config;
mod constants;
pub mod message;
pub mod scheduler;
pub mod session;

pub use app::ContentView;
pub use config::{AppConfig, ConfigError};
pub use message::Message;
pub use session::{FrameRecord, Session, SessionError};
