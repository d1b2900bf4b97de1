// SPDX-License-Identifier: MPL-2.0
//! A media element driven by the wall clock.
//!
//! [`ClockMedia`] keeps a playback position that moves with elapsed time
//! multiplied by the playback rate. Duration comes from a [`MediaProbe`]
//! when a source is bound.

use std::time::{Duration, Instant};

use crate::application::port::{MediaElement, MediaEvent, MediaProbe};
use crate::config::TIME_UPDATE_INTERVAL_MS;
use crate::domain::media::{MediaInfo, MediaSource, ReadyState};
use crate::domain::video::{PlaybackSpeed, Volume};

const TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(TIME_UPDATE_INTERVAL_MS);

/// Clock-driven [`MediaElement`].
#[derive(Debug)]
pub struct ClockMedia<P> {
    probe: P,
    source: Option<MediaSource>,
    info: Option<MediaInfo>,
    ready_state: ReadyState,
    position: f64,
    paused: bool,
    volume: Volume,
    rate: PlaybackSpeed,
    last_advance: Option<Instant>,
    last_time_update: Option<Instant>,
    events: Vec<MediaEvent>,
}

impl<P: MediaProbe> ClockMedia<P> {
    /// Creates an element with no source.
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            source: None,
            info: None,
            ready_state: ReadyState::HaveNothing,
            position: 0.0,
            paused: true,
            volume: Volume::default(),
            rate: PlaybackSpeed::default(),
            last_advance: None,
            last_time_update: None,
            events: Vec::new(),
        }
    }

    /// Creates an element with `source` already bound.
    pub fn with_source(probe: P, source: MediaSource) -> Self {
        let mut media = Self::new(probe);
        media.set_source(source);
        media
    }

    /// Metadata of the bound source, once probed.
    pub fn info(&self) -> Option<MediaInfo> {
        self.info
    }

    /// True when playback ran up to the duration.
    pub fn has_ended(&self) -> bool {
        self.duration()
            .is_some_and(|duration| self.position >= duration)
    }
}

impl<P: MediaProbe> MediaElement for ClockMedia<P> {
    fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    fn set_source(&mut self, source: MediaSource) {
        if self.source.is_some() {
            self.events.push(MediaEvent::Emptied);
        }
        self.position = 0.0;
        self.paused = true;
        self.info = None;
        self.ready_state = ReadyState::HaveNothing;
        self.last_advance = None;
        self.last_time_update = None;

        match self.probe.probe(&source) {
            Ok(info) => {
                tracing::debug!(
                    source = %source,
                    duration_secs = info.duration_secs,
                    width = info.width,
                    height = info.height,
                    "media metadata loaded"
                );
                self.info = Some(info);
                self.ready_state = ReadyState::HaveMetadata;
                self.events.push(MediaEvent::LoadedMetadata);
            }
            Err(err) => {
                tracing::warn!(source = %source, "failed to probe media: {err}");
            }
        }
        self.source = Some(source);
    }

    fn play(&mut self) {
        if self.has_ended() {
            self.position = 0.0;
            self.events.push(MediaEvent::TimeUpdate);
        }
        if self.ready_state.has_metadata() {
            self.ready_state = ReadyState::HaveEnoughData;
        }
        self.paused = false;
        self.last_advance = None;
    }

    fn pause(&mut self) {
        self.paused = true;
        self.last_advance = None;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        if secs.is_nan() {
            return;
        }
        let upper = self.duration().unwrap_or(0.0);
        self.position = secs.clamp(0.0, upper);
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> Option<f64> {
        self.info.map(|info| info.duration_secs)
    }

    fn volume(&self) -> Volume {
        self.volume
    }

    fn set_volume(&mut self, volume: Volume) {
        if self.volume != volume {
            self.volume = volume;
            self.events.push(MediaEvent::VolumeChange);
        }
    }

    fn playback_rate(&self) -> PlaybackSpeed {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: PlaybackSpeed) {
        self.rate = rate;
    }

    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn advance(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        let Some(duration) = self.duration() else {
            return;
        };

        if let Some(previous) = self.last_advance {
            let elapsed = now.saturating_duration_since(previous).as_secs_f64();
            self.position = (self.position + elapsed * self.rate.value()).min(duration);

            if self.position >= duration {
                self.paused = true;
                self.last_advance = None;
                self.last_time_update = Some(now);
                self.events.push(MediaEvent::TimeUpdate);
                tracing::debug!("playback reached the end of the media");
                return;
            }

            let due = self
                .last_time_update
                .is_none_or(|last| now.saturating_duration_since(last) >= TIME_UPDATE_INTERVAL);
            if due {
                self.last_time_update = Some(now);
                self.events.push(MediaEvent::TimeUpdate);
            }
        }
        self.last_advance = Some(now);
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}
