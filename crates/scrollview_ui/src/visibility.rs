//! Indicator visibility with a debounced hide.
//!
//! Any drag activity shows the indicator and stamps the activity clock. When a
//! gesture ends the controller hands back a [`HideCheck`] for the host to fire
//! once it is due. The controller owns no timer, so checks are never cancelled;
//! instead each one carries a generation token and is ignored if anything
//! happened after it was issued.

use std::time::Duration;
use web_time::Instant;

use crate::constants::{HIDE_DELAY, OPACITY_HIDDEN, OPACITY_VISIBLE};

/// A delayed request to hide the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideCheck {
    token: u64,
    due: Instant,
}

impl HideCheck {
    /// Generation this check was issued for.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Earliest time the check should run.
    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Shows the indicator on activity and hides it after a quiet window.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    /// Quiet window before hiding.
    hide_delay: Duration,

    /// Time of the most recent drag activity.
    last_interaction: Option<Instant>,

    /// Bumped on every interaction and every issued check.
    generation: u64,

    visible: bool,
}

impl VisibilityController {
    /// Create a controller with the default hide delay. Starts hidden.
    pub fn new() -> Self {
        Self {
            hide_delay: HIDE_DELAY,
            last_interaction: None,
            generation: 0,
            visible: false,
        }
    }

    /// Set the quiet window before hiding.
    pub fn with_hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = delay;
        self
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// Show the indicator and stamp the activity clock.
    pub fn record_interaction(&mut self, now: Instant) {
        self.visible = true;
        self.last_interaction = Some(now);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Issue a hide check due one window from `now`.
    ///
    /// Supersedes every check issued before it.
    pub fn schedule_check(&mut self, now: Instant) -> HideCheck {
        self.generation = self.generation.wrapping_add(1);
        log::trace!(
            "Visibility: hide check #{} due in {:?}",
            self.generation,
            self.hide_delay
        );
        HideCheck {
            token: self.generation,
            due: now + self.hide_delay,
        }
    }

    /// Run a previously issued check against the live state.
    ///
    /// Hides the indicator only if the check is still the latest one and the
    /// window has elapsed since the last interaction at `now`. Running the same
    /// check again has no further effect. Returns true if the indicator is
    /// hidden by this check.
    pub fn run_check(&mut self, check: HideCheck, now: Instant) -> bool {
        if check.token != self.generation {
            log::trace!(
                "Visibility: stale hide check #{} (current #{})",
                check.token,
                self.generation
            );
            return false;
        }

        let quiet = match self.time_since_interaction(now) {
            Some(elapsed) => elapsed >= self.hide_delay,
            None => true,
        };
        if quiet {
            if self.visible {
                log::debug!("Visibility: hiding indicator");
            }
            self.visible = false;
        }
        quiet
    }

    /// Time since the last interaction, if any.
    pub fn time_since_interaction(&self, now: Instant) -> Option<Duration> {
        self.last_interaction
            .map(|last| now.saturating_duration_since(last))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Binary opacity for the renderer; fading is the renderer's business.
    pub fn opacity(&self) -> f32 {
        if self.visible {
            OPACITY_VISIBLE
        } else {
            OPACITY_HIDDEN
        }
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}
