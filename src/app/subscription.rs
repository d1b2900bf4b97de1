// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Page-level input (shortcut keys, button releases) is only listened to
//! while a player is mounted and not disposed.

use std::time::Duration;

use iced::{event, keyboard, mouse, time, window, Subscription};

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::player::Key;

/// Window and page events routed to the player.
pub fn create_event_subscription(page_listeners: bool) -> Subscription<Message> {
    if page_listeners {
        event::listen_with(|event, status, window_id| match event {
            event::Event::Window(window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            event::Event::Window(window::Event::Opened { .. }) => {
                Some(Message::WindowOpened(window_id))
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::MouseReleased(window_id))
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
                event::Status::Ignored => shortcut(&key).map(|key| Message::KeyPressed {
                    window: window_id,
                    key,
                }),
                event::Status::Captured => None,
            },
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            _ => None,
        })
    }
}

/// Clock ticks, only while something is time-driven.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a pressed key to a player shortcut.
#[must_use]
pub fn shortcut(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Space) => Some(Key::Space),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Key::ArrowRight),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Key::ArrowLeft),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_cover_space_and_arrows() {
        use keyboard::key::Named;

        assert_eq!(
            shortcut(&keyboard::Key::Named(Named::Space)),
            Some(Key::Space)
        );
        assert_eq!(
            shortcut(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Key::ArrowRight)
        );
        assert_eq!(
            shortcut(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Key::ArrowLeft)
        );
        assert_eq!(shortcut(&keyboard::Key::Named(Named::ArrowUp)), None);
        assert_eq!(shortcut(&keyboard::Key::Character("k".into())), None);
    }
}
