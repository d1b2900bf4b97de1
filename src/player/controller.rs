// SPDX-License-Identifier: MPL-2.0
//! The player controller.
//!
//! [`PlayerController`] binds one media element and its control set. Every
//! input arrives through [`PlayerController::dispatch`], which runs to
//! completion: the event is handled, then every media event it caused is
//! drained and handled in order. Work that has to wait (file picking,
//! display mode changes) leaves as an [`Effect`] and comes back as a settle
//! event.

use std::time::Instant;

use tracing::{debug, info};

use super::auto_hide::{AutoHide, HideTimer};
use super::chrome::{Chrome, Fill};
use super::events::{
    ClickTarget, ControlEvent, Dispatch, Effect, Key, PageEvent, PlayerEvent, TimelineEvent,
    VideoEvent,
};
use super::markup::PlayerHost;
use super::pip::{DisplayCapabilities, PipControl, PipTicket};
use super::settings::PlayerSettings;
use super::speed_menu::SpeedMenu;
use super::time_format::{duration_label, progress_percent};
use super::timeline::{time_from_pointer, PointerPosition, Preview, ScrubState};
use super::volume_icon::VolumeIcon;
use crate::application::port::MediaElement;
use crate::domain::error::{DisplayError, InitializationError};
use crate::domain::media::MediaSource;
use crate::domain::video::{PlaybackState, Volume};

/// Controller of a mounted player.
#[derive(Debug)]
pub struct PlayerController<M> {
    media: M,
    settings: PlayerSettings,
    capabilities: DisplayCapabilities,
    playback: PlaybackState,
    pick_pending: bool,
    scrub: ScrubState,
    auto_hide: AutoHide,
    speed_menu: SpeedMenu,
    pip: PipControl,
    fullscreen: bool,
    page_listeners: bool,
    disposed: bool,
    chrome: Chrome,
}

impl<M: MediaElement> PlayerController<M> {
    /// Mounts a player on the container matching `selector`.
    ///
    /// The volume and rate from `settings` are applied to the media element
    /// before the first chrome refresh.
    ///
    /// # Errors
    ///
    /// Returns an [`InitializationError`] if the container, its video
    /// element or any named control is missing. Nothing stays bound then.
    pub fn mount<H>(
        host: &mut H,
        selector: &str,
        settings: PlayerSettings,
    ) -> Result<Self, InitializationError>
    where
        H: PlayerHost<Media = M>,
    {
        let mount = host
            .query(selector)
            .ok_or_else(|| InitializationError::ContainerNotFound(selector.to_string()))?;
        let media = mount.video.ok_or(InitializationError::VideoNotFound)?;
        mount.controls.validate()?;

        let speed_menu = SpeedMenu::new(mount.controls.speed_options().to_vec(), settings.speed);
        let mut controller = Self {
            media,
            capabilities: host.capabilities(),
            playback: PlaybackState::Unset,
            pick_pending: false,
            scrub: ScrubState::default(),
            auto_hide: AutoHide::new(settings.hide_delay),
            speed_menu,
            pip: PipControl::default(),
            fullscreen: false,
            page_listeners: true,
            disposed: false,
            chrome: Chrome::default(),
            settings,
        };

        controller.media.set_volume(controller.settings.volume);
        controller.media.set_playback_rate(controller.settings.speed);
        controller.sync_speed_menu();
        controller.sync_source_name();
        controller.refresh_volume();
        controller.refresh_pip();
        controller.pump(&mut Dispatch::default());

        info!(selector, "player mounted");
        Ok(controller)
    }

    /// Delivers one event and handles everything it causes.
    pub fn dispatch(&mut self, event: impl Into<PlayerEvent>) -> Dispatch {
        let mut dispatch = Dispatch::default();
        if self.disposed {
            return dispatch;
        }
        self.handle(event.into(), &mut dispatch);
        self.pump(&mut dispatch);
        dispatch
    }

    /// Detaches the page-level listeners and cancels the hide timer.
    ///
    /// Every later event is ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.page_listeners = false;
        self.auto_hide.cancel();
        self.disposed = true;
        info!("player disposed");
    }

    // ---------------------------------------------------------------------
    // Observers
    // ---------------------------------------------------------------------

    /// Presentation model for renderers.
    #[must_use]
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// The hidden flag as last decided by the auto-hide timer.
    #[must_use]
    pub fn is_hidden_interface(&self) -> bool {
        self.auto_hide.is_hidden()
    }

    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.scrub.is_dragging()
    }

    #[must_use]
    pub fn hide_timer(&self) -> Option<HideTimer> {
        self.auto_hide.timer()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_pick_pending(&self) -> bool {
        self.pick_pending
    }

    #[must_use]
    pub fn pip(&self) -> &PipControl {
        &self.pip
    }

    /// Whether page-level keyboard and click events are still handled.
    #[must_use]
    pub fn listens_to_page(&self) -> bool {
        self.page_listeners
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ---------------------------------------------------------------------
    // Event handling
    // ---------------------------------------------------------------------

    fn handle(&mut self, event: PlayerEvent, out: &mut Dispatch) {
        match event {
            PlayerEvent::Video(event) => self.handle_video(event, out),
            PlayerEvent::Control(event) => self.handle_control(event, out),
            PlayerEvent::Timeline(event) => self.handle_timeline(event),
            PlayerEvent::Page(event) => {
                if self.page_listeners {
                    self.handle_page(event, out);
                }
            }
            PlayerEvent::MouseMove(now) => {
                self.auto_hide.touch(now);
                self.chrome.set_interface_hidden(false);
            }
            PlayerEvent::FullscreenChange(fullscreen) => {
                self.fullscreen = fullscreen;
                self.chrome.set_fullscreen(fullscreen);
            }
            PlayerEvent::Tick(now) => self.tick(now),
            PlayerEvent::SourcePicked(files) => self.bind_picked(files),
            PlayerEvent::FullscreenSettled(result) => {
                if let Err(err) = result {
                    debug!("fullscreen request failed: {err}");
                }
            }
            PlayerEvent::PictureInPictureSettled(ticket, result) => {
                self.settle_pip(ticket, result);
            }
        }
    }

    fn handle_video(&mut self, event: VideoEvent, out: &mut Dispatch) {
        match event {
            VideoEvent::Click => self.toggle_playback(out),
            VideoEvent::DoubleClick => self.toggle_fullscreen(out),
            VideoEvent::LoadedMetadata => {
                self.refresh_duration();
                self.refresh_volume();
                self.refresh_pip();
            }
            VideoEvent::TimeUpdate => {
                self.refresh_duration();
                self.chrome.set_interface_hidden(self.auto_hide.is_hidden());
            }
            VideoEvent::VolumeChange => self.refresh_volume(),
            VideoEvent::EnterPictureInPicture => {
                self.pip.entered();
                self.sync_pip();
            }
            VideoEvent::LeavePictureInPicture => {
                self.pip.left();
                self.sync_pip();
            }
            VideoEvent::Emptied => self.refresh_pip(),
        }
    }

    fn handle_control(&mut self, event: ControlEvent, out: &mut Dispatch) {
        match event {
            ControlEvent::TogglePlayback => self.toggle_playback(out),
            ControlEvent::SkipBackward => self.skip(-self.settings.skip_step.value()),
            ControlEvent::SkipForward => self.skip(self.settings.skip_step.value()),
            ControlEvent::VolumeInput(position) => {
                self.media.set_volume(Volume::from_slider(position));
            }
            ControlEvent::ToggleVolume => {
                let toggled = self.media.volume().toggled();
                self.media.set_volume(toggled);
            }
            ControlEvent::OpenSpeedMenu => {
                self.speed_menu.toggle();
                self.sync_speed_menu();
            }
            ControlEvent::SelectSpeed(index) => {
                if let Some(speed) = self.speed_menu.select(index) {
                    debug!(speed = speed.value(), "playback rate selected");
                    self.media.set_playback_rate(speed);
                }
                self.sync_speed_menu();
            }
            ControlEvent::TogglePictureInPicture => self.toggle_pip(out),
            ControlEvent::ToggleFullscreen => self.toggle_fullscreen(out),
        }
    }

    fn handle_timeline(&mut self, event: TimelineEvent) {
        match event {
            TimelineEvent::PointerDown(pointer) => {
                self.seek_to_pointer(&pointer);
                self.chrome.clear_ghost();
                self.scrub.begin();
            }
            TimelineEvent::PointerMove(pointer) => {
                let preview = Preview::at(&pointer, self.media.duration());
                if self.scrub.is_dragging() {
                    self.seek_to_pointer(&pointer);
                }
                self.chrome.set_ghost_preview(preview);
            }
            TimelineEvent::PointerUp => self.scrub.end(),
        }
    }

    fn handle_page(&mut self, event: PageEvent, out: &mut Dispatch) {
        match event {
            PageEvent::Click(ClickTarget::SpeedToggle) => {}
            PageEvent::Click(ClickTarget::Elsewhere) => {
                if self.speed_menu.is_open() {
                    self.speed_menu.close();
                    self.sync_speed_menu();
                }
            }
            PageEvent::KeyDown(Key::Space) => {
                out.default_prevented = true;
                self.toggle_playback(out);
            }
            PageEvent::KeyDown(Key::ArrowRight) => self.skip(self.settings.skip_step.value()),
            PageEvent::KeyDown(Key::ArrowLeft) => self.skip(-self.settings.skip_step.value()),
        }
    }

    /// Handles every event the media element queued, in order.
    fn pump(&mut self, out: &mut Dispatch) {
        loop {
            let events = self.media.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.handle_video(event.into(), out);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    fn toggle_playback(&mut self, out: &mut Dispatch) {
        if self.playback.is_unset() {
            if self.pick_pending {
                debug!("toggle ignored while a source pick is pending");
                return;
            }
            if self.media.source().is_none() {
                self.pick_pending = true;
                out.effects.push(Effect::PickSource {
                    filter: self.settings.filter.clone(),
                    multiple: false,
                });
                return;
            }
        }
        self.set_playback(self.playback.toggled());
    }

    fn set_playback(&mut self, state: PlaybackState) {
        self.playback = state;
        self.chrome.set_playing(state.is_playing());
        if state.is_playing() {
            self.media.play();
        } else {
            self.media.pause();
        }
        debug!(?state, "playback state changed");
    }

    fn bind_picked(&mut self, files: Vec<MediaSource>) {
        if !self.pick_pending {
            debug!("ignoring unsolicited source pick");
            return;
        }
        self.pick_pending = false;

        let Some(source) = files.into_iter().next() else {
            info!("source pick cancelled");
            return;
        };

        if self.media.source().is_none() {
            info!(source = %source, "binding media source");
            self.media.set_source(source);
            self.sync_source_name();
        }
        self.set_playback(PlaybackState::Playing);
    }

    fn skip(&mut self, delta_secs: f64) {
        let target = self.media.current_time() + delta_secs;
        self.media.set_current_time(target);
    }

    fn seek_to_pointer(&mut self, pointer: &PointerPosition) {
        let time = time_from_pointer(pointer.x, pointer.bar, self.media.duration());
        self.media.set_current_time(time);
    }

    fn toggle_fullscreen(&mut self, out: &mut Dispatch) {
        out.effects.push(if self.fullscreen {
            Effect::ExitFullscreen
        } else {
            Effect::RequestFullscreen
        });
    }

    fn toggle_pip(&mut self, out: &mut Dispatch) {
        let Some(ticket) = self.pip.begin() else {
            return;
        };
        out.effects.push(if self.pip.is_active() {
            Effect::ExitPictureInPicture(ticket)
        } else {
            Effect::RequestPictureInPicture(ticket)
        });
        self.sync_pip();
    }

    fn settle_pip(&mut self, ticket: PipTicket, result: Result<(), DisplayError>) {
        if !self.pip.settle(ticket) {
            debug!("ignoring stale picture-in-picture settle");
            return;
        }
        self.sync_pip();
        if let Err(err) = result {
            debug!("picture-in-picture request failed: {err}");
        }
    }

    fn tick(&mut self, now: Instant) {
        self.media.advance(now);
        if self.auto_hide.poll(now) {
            debug!("player chrome idle, hiding on next time update");
        }
    }

    // ---------------------------------------------------------------------
    // Chrome refresh
    // ---------------------------------------------------------------------

    fn refresh_duration(&mut self) {
        let current = self.media.current_time();
        let duration = self.media.duration();
        self.chrome.set_current_fill(Fill(progress_percent(current, duration)));
        self.chrome.set_duration_label(duration_label(current, duration));
    }

    fn refresh_volume(&mut self) {
        let volume = self.media.volume();
        self.chrome.set_volume(VolumeIcon::for_volume(volume), volume.slider_position());
    }

    fn refresh_pip(&mut self) {
        self.pip.refresh(
            self.capabilities,
            self.media.disable_picture_in_picture(),
            self.media.ready_state(),
        );
        self.sync_pip();
    }

    fn sync_pip(&mut self) {
        self.chrome.set_pip(self.pip.is_visible(), self.pip.is_enabled());
    }

    fn sync_speed_menu(&mut self) {
        self.chrome.set_speed_menu(
            self.speed_menu.is_open(),
            self.speed_menu.options(),
            self.speed_menu.active(),
        );
    }

    fn sync_source_name(&mut self) {
        let name = self.media.source().map(MediaSource::display_name);
        self.chrome.set_source_name(name);
    }
}
