// SPDX-License-Identifier: MPL-2.0
//! Translation between Iced messages and player events.
//!
//! The view reports raw interactions; this module turns them into the
//! player's events (including the page-level click that follows every
//! click on the player) and runs the effects the player hands back.

use std::sync::Arc;
use std::time::Instant;

use iced::{window, Task};

use super::Message;
use crate::application::port::SourcePicker;
use crate::domain::error::DisplayError;
use crate::player::{
    BarGeometry, ClickTarget, ControlEvent, Dispatch, Effect, PageEvent, PlayerEvent,
    PointerPosition, TimelineEvent, VideoEvent,
};
use crate::ui::design_tokens::sizing;
use crate::ui::player_view;

/// Last known pointer over the timeline.
///
/// Iced reports presses without a position, so the position of the latest
/// move is reused for the press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineCursor(Option<PointerPosition>);

impl TimelineCursor {
    fn track(&mut self, x: f32, width: f32) -> PointerPosition {
        let pointer = PointerPosition::new(x, BarGeometry::new(0.0, width), sizing::HINT_WIDTH);
        self.0 = Some(pointer);
        pointer
    }

    #[must_use]
    pub fn position(&self) -> Option<PointerPosition> {
        self.0
    }
}

/// Player events caused by one view message, in delivery order.
pub fn events_for(
    message: player_view::Message,
    cursor: &mut TimelineCursor,
    now: Instant,
) -> Vec<PlayerEvent> {
    let elsewhere = PlayerEvent::Page(PageEvent::Click(ClickTarget::Elsewhere));

    match message {
        player_view::Message::VideoPressed => vec![VideoEvent::Click.into(), elsewhere],
        player_view::Message::VideoDoubleClicked => {
            vec![VideoEvent::DoubleClick.into(), elsewhere]
        }
        player_view::Message::PointerMoved => vec![PlayerEvent::MouseMove(now)],
        player_view::Message::Control(ControlEvent::OpenSpeedMenu) => vec![
            ControlEvent::OpenSpeedMenu.into(),
            PageEvent::Click(ClickTarget::SpeedToggle).into(),
        ],
        // Dragging the slider is not a click.
        player_view::Message::Control(event @ ControlEvent::VolumeInput(_)) => {
            vec![event.into()]
        }
        player_view::Message::Control(event) => vec![event.into(), elsewhere],
        player_view::Message::TimelineMoved { x, width } => {
            vec![TimelineEvent::PointerMove(cursor.track(x, width)).into()]
        }
        player_view::Message::TimelinePressed => match cursor.position() {
            Some(pointer) => vec![TimelineEvent::PointerDown(pointer).into(), elsewhere],
            None => vec![elsewhere],
        },
        player_view::Message::TimelineReleased => vec![TimelineEvent::PointerUp.into()],
    }
}

/// Starts the work requested by `dispatch`.
pub fn run_effects(
    dispatch: Dispatch,
    picker: &Arc<dyn SourcePicker>,
    window_id: Option<window::Id>,
) -> Task<Message> {
    Task::batch(
        dispatch
            .effects
            .into_iter()
            .map(|effect| run_effect(effect, picker, window_id)),
    )
}

fn run_effect(
    effect: Effect,
    picker: &Arc<dyn SourcePicker>,
    window_id: Option<window::Id>,
) -> Task<Message> {
    match effect {
        Effect::PickSource { filter, multiple } => {
            Task::perform(picker.open(&filter, multiple), Message::SourcePicked)
        }
        Effect::RequestFullscreen => set_fullscreen(window_id, true),
        Effect::ExitFullscreen => set_fullscreen(window_id, false),
        Effect::RequestPictureInPicture(ticket) | Effect::ExitPictureInPicture(ticket) => {
            Task::done(Message::PictureInPictureSettled(
                ticket,
                Err(DisplayError::Unsupported),
            ))
        }
    }
}

/// Switches the window mode, then reports the outcome.
fn set_fullscreen(window_id: Option<window::Id>, desired: bool) -> Task<Message> {
    let Some(window_id) = window_id else {
        return Task::done(Message::FullscreenSettled {
            desired,
            result: Err(DisplayError::Unsupported),
        });
    };

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode).chain(Task::done(Message::FullscreenSettled {
        desired,
        result: Ok(()),
    }))
}

/// Player events for a settled window mode change.
#[must_use]
pub fn fullscreen_settled(desired: bool, result: Result<(), DisplayError>) -> Vec<PlayerEvent> {
    match result {
        Ok(()) => vec![
            PlayerEvent::FullscreenSettled(Ok(())),
            PlayerEvent::FullscreenChange(desired),
        ],
        Err(err) => vec![PlayerEvent::FullscreenSettled(Err(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(message: player_view::Message) -> Vec<PlayerEvent> {
        events_for(message, &mut TimelineCursor::default(), Instant::now())
    }

    #[test]
    fn clicks_bubble_to_the_page() {
        assert_eq!(
            events(player_view::Message::VideoPressed),
            vec![
                PlayerEvent::Video(VideoEvent::Click),
                PlayerEvent::Page(PageEvent::Click(ClickTarget::Elsewhere)),
            ]
        );
        assert_eq!(
            events(player_view::Message::Control(ControlEvent::SkipForward)).last(),
            Some(&PlayerEvent::Page(PageEvent::Click(ClickTarget::Elsewhere)))
        );
    }

    #[test]
    fn speed_toggle_click_keeps_menu_open() {
        assert_eq!(
            events(player_view::Message::Control(ControlEvent::OpenSpeedMenu)),
            vec![
                PlayerEvent::Control(ControlEvent::OpenSpeedMenu),
                PlayerEvent::Page(PageEvent::Click(ClickTarget::SpeedToggle)),
            ]
        );
    }

    #[test]
    fn volume_input_is_not_a_click() {
        assert_eq!(
            events(player_view::Message::Control(ControlEvent::VolumeInput(40.0))),
            vec![PlayerEvent::Control(ControlEvent::VolumeInput(40.0))]
        );
    }

    #[test]
    fn press_reuses_last_timeline_position() {
        let mut cursor = TimelineCursor::default();
        let now = Instant::now();

        let pressed = events_for(player_view::Message::TimelinePressed, &mut cursor, now);
        assert_eq!(pressed.len(), 1);

        events_for(
            player_view::Message::TimelineMoved {
                x: 30.0,
                width: 120.0,
            },
            &mut cursor,
            now,
        );
        let pressed = events_for(player_view::Message::TimelinePressed, &mut cursor, now);
        let Some(PlayerEvent::Timeline(TimelineEvent::PointerDown(pointer))) = pressed.first()
        else {
            panic!("expected a pointer down, got {pressed:?}");
        };
        assert_eq!(pointer.x, 30.0);
        assert_eq!(pointer.bar, BarGeometry::new(0.0, 120.0));
    }

    #[test]
    fn fullscreen_change_follows_successful_settle() {
        assert_eq!(
            fullscreen_settled(true, Ok(())),
            vec![
                PlayerEvent::FullscreenSettled(Ok(())),
                PlayerEvent::FullscreenChange(true),
            ]
        );
        assert_eq!(
            fullscreen_settled(true, Err(DisplayError::Unsupported)),
            vec![PlayerEvent::FullscreenSettled(Err(DisplayError::Unsupported))]
        );
    }
}
