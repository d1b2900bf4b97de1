// SPDX-License-Identifier: MPL-2.0
//! Application root state and the bridge between Iced and the player.
//!
//! The `App` owns one mounted [`PlayerController`], forwards view messages
//! and page events to it, and runs the effects it returns (file dialog,
//! window mode changes).

mod host;
mod message;
pub mod paths;
mod subscription;
mod update;

pub use host::{DesktopHost, PLAYER_SELECTOR};
pub use message::{Flags, Message};

use std::fmt;
use std::sync::Arc;

use iced::widget::{container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};

use crate::application::port::SourcePicker;
use crate::config;
use crate::domain::media::MediaSource;
use crate::infrastructure::{ClockMedia, FfmpegProbe, RfdSourcePicker};
use crate::player::{
    ControlEvent, PageEvent, PlayerController, PlayerEvent, PlayerSettings, TimelineEvent,
};
use crate::ui::design_tokens::typography;
use crate::ui::player_view;

/// Media element used by the desktop player.
pub type DesktopMedia = ClockMedia<FfmpegProbe>;

/// Root Iced application state.
pub struct App {
    player: Option<PlayerController<DesktopMedia>>,
    /// Why mounting failed, shown instead of the player.
    mount_error: Option<String>,
    picker: Arc<dyn SourcePicker>,
    window_id: Option<window::Id>,
    timeline: update::TimelineCursor,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mounted", &self.player.is_some())
            .field("mount_error", &self.mount_error)
            .field("window_id", &self.window_id)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 540;
pub const WINDOW_DEFAULT_WIDTH: u32 = 880;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 560;

const APP_TITLE: &str = "IcedReel";

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, mounts the player and, when a file was
    /// given on the command line, starts playing it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, _warning) = config::load();

        let mut picker = RfdSourcePicker::new().with_title("Open video");
        if let Some(dir) = dirs::video_dir() {
            picker = picker.with_directory(dir);
        }

        let media = match &flags.file_path {
            Some(path) => ClockMedia::with_source(FfmpegProbe, MediaSource::new(path)),
            None => ClockMedia::new(FfmpegProbe),
        };
        let mut host = DesktopHost::new(media, config.player.speed_options());

        let mut app = Self::mount(
            &mut host,
            PlayerSettings::from(&config.player),
            Arc::new(picker),
        );

        let task = if flags.file_path.is_some() {
            app.dispatch_all(vec![ControlEvent::TogglePlayback.into()])
        } else {
            Task::none()
        };
        (app, task)
    }

    fn mount(
        host: &mut DesktopHost<DesktopMedia>,
        settings: PlayerSettings,
        picker: Arc<dyn SourcePicker>,
    ) -> Self {
        let mounted = PlayerController::mount(host, PLAYER_SELECTOR, settings);
        let (player, mount_error) = match mounted {
            Ok(player) => (Some(player), None),
            Err(err) => {
                tracing::error!("failed to mount the player: {err}");
                (None, Some(err.to_string()))
            }
        };

        Self {
            player,
            mount_error,
            picker,
            window_id: None,
            timeline: update::TimelineCursor::default(),
        }
    }

    /// The mounted player, if mounting succeeded.
    #[must_use]
    pub fn player(&self) -> Option<&PlayerController<DesktopMedia>> {
        self.player.as_ref()
    }

    fn title(&self) -> String {
        match self
            .player
            .as_ref()
            .and_then(|player| player.chrome().source_name())
        {
            Some(name) => format!("{name} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let live = self.player.as_ref().filter(|player| !player.is_disposed());

        let event_sub = subscription::create_event_subscription(
            live.is_some_and(PlayerController::listens_to_page),
        );
        let tick_sub = subscription::create_tick_subscription(
            live.is_some_and(|player| player.is_playing() || player.hide_timer().is_some()),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(view_message) => {
                let now = std::time::Instant::now();
                let events = update::events_for(view_message, &mut self.timeline, now);
                self.dispatch_all(events)
            }
            Message::Tick(now) => self.dispatch_all(vec![PlayerEvent::Tick(now)]),
            Message::KeyPressed { window, key } => {
                self.window_id = Some(window);
                self.dispatch_all(vec![PageEvent::KeyDown(key).into()])
            }
            Message::MouseReleased(window) => {
                self.window_id = Some(window);
                if self.player.as_ref().is_some_and(PlayerController::drag_active) {
                    self.dispatch_all(vec![TimelineEvent::PointerUp.into()])
                } else {
                    Task::none()
                }
            }
            Message::WindowOpened(window) => {
                self.window_id = Some(window);
                Task::none()
            }
            Message::SourcePicked(files) => {
                self.dispatch_all(vec![PlayerEvent::SourcePicked(files)])
            }
            Message::FullscreenSettled { desired, result } => {
                self.dispatch_all(update::fullscreen_settled(desired, result))
            }
            Message::PictureInPictureSettled(ticket, result) => {
                self.dispatch_all(vec![PlayerEvent::PictureInPictureSettled(ticket, result)])
            }
            Message::WindowCloseRequested(window) => {
                if let Some(player) = self.player.as_mut() {
                    player.dispose();
                }
                window::close(window)
            }
        }
    }

    /// Delivers `events` in order and starts every effect they produce.
    fn dispatch_all(&mut self, events: Vec<PlayerEvent>) -> Task<Message> {
        let Some(player) = self.player.as_mut() else {
            return Task::none();
        };

        let tasks: Vec<Task<Message>> = events
            .into_iter()
            .map(|event| {
                let dispatch = player.dispatch(event);
                update::run_effects(dispatch, &self.picker, self.window_id)
            })
            .collect();
        Task::batch(tasks)
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.player {
            Some(player) => player_view::view(player.chrome()).map(Message::Player),
            None => {
                let reason = self.mount_error.as_deref().unwrap_or("unknown error");
                let message = text(format!("The player could not start: {reason}"))
                    .size(typography::BODY);
                container(message).center(Length::Fill).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::InitializationError;
    use crate::player::markup::SPEED_OPTION;
    use crate::player::{Key, PlaybackIcon};
    use crate::ui::player_view::Message as ViewMessage;

    fn host() -> DesktopHost<DesktopMedia> {
        let speeds = config::PlayerConfig::default().speed_options();
        DesktopHost::new(ClockMedia::new(FfmpegProbe), speeds)
    }

    fn app() -> App {
        let mut host = host();
        App::mount(
            &mut host,
            PlayerSettings::default(),
            Arc::new(RfdSourcePicker::new()),
        )
    }

    #[test]
    fn mounts_with_default_settings() {
        let app = app();
        assert!(app.player().is_some());
        assert!(app.mount_error.is_none());
        assert_eq!(app.title(), APP_TITLE);
    }

    #[test]
    fn missing_media_reports_mount_error() {
        let mut host = host();
        let _ = host.query(PLAYER_SELECTOR);
        let app = App::mount(
            &mut host,
            PlayerSettings::default(),
            Arc::new(RfdSourcePicker::new()),
        );

        assert!(app.player().is_none());
        assert_eq!(
            app.mount_error,
            Some(InitializationError::VideoNotFound.to_string())
        );
    }

    #[test]
    fn empty_speed_list_reports_mount_error() {
        let mut host = DesktopHost::new(ClockMedia::new(FfmpegProbe), Vec::new());
        let app = App::mount(
            &mut host,
            PlayerSettings::default(),
            Arc::new(RfdSourcePicker::new()),
        );

        assert!(app.player().is_none());
        assert_eq!(
            app.mount_error,
            Some(InitializationError::MissingControl(SPEED_OPTION).to_string())
        );
    }

    #[test]
    fn first_toggle_asks_for_a_file() {
        let mut app = app();
        let _ = app.update(Message::Player(ViewMessage::Control(
            ControlEvent::TogglePlayback,
        )));

        let player = app.player().expect("mounted");
        assert!(player.is_pick_pending());
        assert!(!player.is_playing());
    }

    #[test]
    fn picked_file_starts_playback() {
        let mut app = app();
        let _ = app.update(Message::Player(ViewMessage::VideoPressed));
        let _ = app.update(Message::SourcePicked(vec![MediaSource::new(
            "/nonexistent/clip.mp4",
        )]));

        let player = app.player().expect("mounted");
        assert!(player.is_playing());
        assert_eq!(player.chrome().playback_icon(), PlaybackIcon::Pause);
        assert_eq!(app.title(), format!("clip.mp4 - {APP_TITLE}"));
    }

    #[test]
    fn key_press_records_window() {
        let mut app = app();
        let id = window::Id::unique();
        let _ = app.update(Message::KeyPressed {
            window: id,
            key: Key::ArrowRight,
        });
        assert_eq!(app.window_id, Some(id));
    }

    #[test]
    fn close_request_disposes_player() {
        let mut app = app();
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        let player = app.player().expect("mounted");
        assert!(player.is_disposed());
        assert!(!player.listens_to_page());
    }

    #[test]
    fn fullscreen_without_window_is_rejected() {
        let mut app = app();
        let _ = app.update(Message::FullscreenSettled {
            desired: true,
            result: Err(crate::domain::error::DisplayError::Unsupported),
        });
        assert!(!app.player().expect("mounted").is_fullscreen());

        let _ = app.update(Message::FullscreenSettled {
            desired: true,
            result: Ok(()),
        });
        assert!(app.player().expect("mounted").is_fullscreen());
    }
}
