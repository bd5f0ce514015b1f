//! Fire-and-forget timer queue for indicator hide checks.
//!
//! Checks are never cancelled. Each one is fired once its due time passes and
//! the scroll view decides on its own whether the check is still relevant.

use scrollview_ui::{HideCheck, ScrollView};
use web_time::Instant;

/// Pending hide checks waiting for their due time.
#[derive(Debug, Clone, Default)]
pub struct HideScheduler {
    pending: Vec<HideCheck>,
}

impl HideScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a check returned by a gesture release.
    pub fn schedule(&mut self, check: HideCheck) {
        self.pending.push(check);
    }

    /// Number of checks not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Earliest due time among pending checks.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(HideCheck::due).min()
    }

    /// Fire every check due at `now`, oldest first.
    ///
    /// Returns the number of checks fired.
    pub fn fire_due(&mut self, view: &mut ScrollView, now: Instant) -> usize {
        match self.next_due() {
            Some(due) if due <= now => {}
            _ => return 0,
        }

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|check| check.is_due(now));
        self.pending = waiting;

        due.sort_by_key(HideCheck::due);
        for check in &due {
            if view.run_hide_check(*check, now) {
                log::debug!("Hide check #{} hid the indicator", check.token());
            }
        }
        due.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn dragged_view(now: Instant) -> (ScrollView, HideCheck) {
        let mut view = ScrollView::default();
        view.apply_metrics(1000.0, 500.0);
        view.apply_drag(-40.0, now);
        let check = view.commit_drag(-40.0, now).unwrap();
        (view, check)
    }

    #[test]
    fn test_fires_only_when_due() {
        let t0 = Instant::now();
        let (mut view, check) = dragged_view(t0);
        let mut scheduler = HideScheduler::new();
        scheduler.schedule(check);
        assert_eq!(scheduler.next_due(), Some(check.due()));

        assert_eq!(scheduler.fire_due(&mut view, t0 + Duration::from_millis(500)), 0);
        assert_eq!(scheduler.pending(), 1);
        assert!(view.visibility().is_visible());

        assert_eq!(scheduler.fire_due(&mut view, check.due()), 1);
        assert_eq!(scheduler.pending(), 0);
        assert!(!view.visibility().is_visible());
    }

    #[test]
    fn test_empty_scheduler_fires_nothing() {
        let mut view = ScrollView::default();
        let mut scheduler = HideScheduler::new();
        assert_eq!(scheduler.next_due(), None);
        assert_eq!(scheduler.fire_due(&mut view, Instant::now()), 0);
    }

    #[test]
    fn test_stale_checks_are_harmless() {
        let t0 = Instant::now();
        let (mut view, first) = dragged_view(t0);
        let mut scheduler = HideScheduler::new();
        scheduler.schedule(first);

        let t1 = t0 + Duration::from_millis(1800);
        view.apply_drag(-10.0, t1);
        let second = view.commit_drag(-10.0, t1).unwrap();
        scheduler.schedule(second);

        // First check comes due while the second gesture is fresh
        assert_eq!(scheduler.fire_due(&mut view, first.due()), 1);
        assert!(view.visibility().is_visible());

        assert_eq!(scheduler.fire_due(&mut view, second.due()), 1);
        assert!(!view.visibility().is_visible());
    }
}
