// SPDX-License-Identifier: MPL-2.0
//! Playback speed menu.

use crate::domain::video::PlaybackSpeed;

/// Speed menu entries with a single active marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedMenu {
    options: Vec<PlaybackSpeed>,
    active: Option<usize>,
    open: bool,
}

impl SpeedMenu {
    /// Builds a closed menu; the entry matching `current` starts active.
    #[must_use]
    pub fn new(options: Vec<PlaybackSpeed>, current: PlaybackSpeed) -> Self {
        let active = options.iter().position(|speed| speed.same_as(current));
        Self {
            options,
            active,
            open: false,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Marks entry `index` active and returns its rate.
    ///
    /// Out-of-range indices leave the menu untouched.
    pub fn select(&mut self, index: usize) -> Option<PlaybackSpeed> {
        let speed = *self.options.get(index)?;
        self.active = Some(index);
        Some(speed)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn options(&self) -> &[PlaybackSpeed] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> SpeedMenu {
        let options = [0.5, 1.0, 2.0].map(PlaybackSpeed::new).to_vec();
        SpeedMenu::new(options, PlaybackSpeed::new(1.0))
    }

    #[test]
    fn current_speed_starts_active() {
        let menu = menu();
        assert_eq!(menu.active(), Some(1));
        assert!(!menu.is_open());
    }

    #[test]
    fn unknown_current_speed_has_no_active_entry() {
        let menu = SpeedMenu::new(vec![PlaybackSpeed::new(2.0)], PlaybackSpeed::new(1.0));
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut menu = menu();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_moves_the_single_marker() {
        let mut menu = menu();
        let speed = menu.select(2);

        assert_eq!(speed, Some(PlaybackSpeed::new(2.0)));
        assert_eq!(menu.active(), Some(2));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut menu = menu();
        assert_eq!(menu.select(9), None);
        assert_eq!(menu.active(), Some(1));
    }
}
