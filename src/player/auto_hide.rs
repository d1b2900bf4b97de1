// SPDX-License-Identifier: MPL-2.0
//! Auto-hide countdown for the player chrome.
//!
//! Time is injected: [`AutoHide::touch`] schedules with the caller's
//! `Instant` and [`AutoHide::poll`] observes expiry, so there is never more
//! than one pending timer and tests need no real clock.

use crate::domain::ui::HideDelay;
use std::time::{Duration, Instant};

/// A scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    token: u64,
    deadline: Instant,
}

impl HideTimer {
    /// Identity of this scheduling; a reschedule always yields a new token.
    #[must_use]
    pub fn token(self) -> u64 {
        self.token
    }

    #[must_use]
    pub fn deadline(self) -> Instant {
        self.deadline
    }
}

/// Visibility state driven by mouse activity.
#[derive(Debug, Clone)]
pub struct AutoHide {
    delay: Duration,
    timer: Option<HideTimer>,
    hidden: bool,
    next_token: u64,
}

impl AutoHide {
    #[must_use]
    pub fn new(delay: HideDelay) -> Self {
        Self {
            delay: delay.as_duration(),
            timer: None,
            hidden: false,
            next_token: 0,
        }
    }

    /// Records activity: reveals the chrome and restarts the countdown.
    pub fn touch(&mut self, now: Instant) {
        self.hidden = false;
        self.next_token = self.next_token.wrapping_add(1);
        self.timer = Some(HideTimer {
            token: self.next_token,
            deadline: now + self.delay,
        });
    }

    /// Fires the pending timer if its deadline has passed.
    ///
    /// Returns true when this call flipped the state to hidden.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(timer) if now >= timer.deadline => {
                self.timer = None;
                self.hidden = true;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending timer without changing visibility.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn timer(&self) -> Option<HideTimer> {
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_hide() -> AutoHide {
        AutoHide::new(HideDelay::new(5))
    }

    #[test]
    fn starts_visible_without_timer() {
        let state = auto_hide();
        assert!(!state.is_hidden());
        assert!(state.timer().is_none());
    }

    #[test]
    fn hides_after_delay() {
        let start = Instant::now();
        let mut state = auto_hide();
        state.touch(start);

        assert!(!state.poll(start + Duration::from_millis(4_999)));
        assert!(!state.is_hidden());
        assert!(state.poll(start + Duration::from_secs(5)));
        assert!(state.is_hidden());
        assert!(state.timer().is_none());
    }

    #[test]
    fn activity_before_expiry_prevents_hiding() {
        let start = Instant::now();
        let mut state = auto_hide();
        state.touch(start);
        state.touch(start + Duration::from_secs(4));

        assert!(!state.poll(start + Duration::from_secs(6)));
        assert!(!state.is_hidden());
        assert!(state.poll(start + Duration::from_secs(9)));
    }

    #[test]
    fn reschedule_replaces_the_single_timer() {
        let start = Instant::now();
        let mut state = auto_hide();
        state.touch(start);
        let first = state.timer().map(HideTimer::token);
        state.touch(start + Duration::from_secs(1));
        let second = state.timer();

        assert_ne!(first, second.map(HideTimer::token));
        assert_eq!(
            second.map(HideTimer::deadline),
            Some(start + Duration::from_secs(6))
        );
    }

    #[test]
    fn touch_reveals_hidden_chrome() {
        let start = Instant::now();
        let mut state = auto_hide();
        state.touch(start);
        state.poll(start + Duration::from_secs(10));
        assert!(state.is_hidden());

        state.touch(start + Duration::from_secs(11));
        assert!(!state.is_hidden());
    }

    #[test]
    fn cancel_keeps_visibility() {
        let start = Instant::now();
        let mut state = auto_hide();
        state.touch(start);
        state.cancel();

        assert!(!state.poll(start + Duration::from_secs(60)));
        assert!(!state.is_hidden());
    }
}
