// SPDX-License-Identifier: MPL-2.0
//! End-to-end behaviour of a mounted player driven through its public API.

use std::time::{Duration, Instant};

use approx::assert_abs_diff_eq;
use futures_util::future::{BoxFuture, FutureExt};
use iced_reel::app::{DesktopHost, PLAYER_SELECTOR};
use iced_reel::application::port::{MediaElement, MediaProbe, SourcePicker};
use iced_reel::domain::error::{DisplayError, InitializationError, VideoError};
use iced_reel::domain::media::{MediaFilter, MediaInfo, MediaSource};
use iced_reel::domain::video::{PlaybackSpeed, Volume};
use iced_reel::infrastructure::ClockMedia;
use iced_reel::player::{
    format_time, time_from_pointer, BarGeometry, ControlEvent, ControlSet, DisplayCapabilities,
    Effect, FullscreenIcon, Key, PageEvent, PlaybackIcon, PlayerController, PlayerEvent,
    PlayerHost, PlayerMount, PlayerSettings, VideoEvent, VolumeIcon,
};

#[derive(Debug)]
struct FixedProbe(f64);

impl MediaProbe for FixedProbe {
    fn probe(&self, _source: &MediaSource) -> Result<MediaInfo, VideoError> {
        Ok(MediaInfo {
            duration_secs: self.0,
            width: 1280,
            height: 720,
        })
    }
}

/// Picker answering every request with the same files.
struct CannedPicker(Vec<MediaSource>);

impl SourcePicker for CannedPicker {
    fn open(
        &self,
        _filter: &MediaFilter,
        multiple: bool,
    ) -> BoxFuture<'static, Vec<MediaSource>> {
        let mut files = self.0.clone();
        if !multiple {
            files.truncate(1);
        }
        async move { files }.boxed()
    }
}

type Player = PlayerController<ClockMedia<FixedProbe>>;

fn speeds() -> Vec<PlaybackSpeed> {
    [0.5, 1.0, 1.5, 2.0].map(PlaybackSpeed::new).to_vec()
}

fn unbound(duration: f64) -> Player {
    let mut host = DesktopHost::new(ClockMedia::new(FixedProbe(duration)), speeds());
    PlayerController::mount(&mut host, PLAYER_SELECTOR, PlayerSettings::default())
        .expect("mount")
}

fn bound(duration: f64) -> Player {
    let media = ClockMedia::with_source(FixedProbe(duration), MediaSource::new("clip.mkv"));
    let mut host = DesktopHost::new(media, speeds());
    PlayerController::mount(&mut host, PLAYER_SELECTOR, PlayerSettings::default())
        .expect("mount")
}

/// Runs a pick effect through `picker` and settles it.
fn settle_pick(player: &mut Player, effect: &Effect, picker: &dyn SourcePicker) {
    let Effect::PickSource { filter, multiple } = effect else {
        panic!("expected a pick, got {effect:?}");
    };
    let files = picker
        .open(filter, *multiple)
        .now_or_never()
        .expect("canned picker resolves immediately");
    player.dispatch(PlayerEvent::SourcePicked(files));
}

#[test]
fn time_labels_truncate_seconds() {
    assert_eq!(format_time(65.9), "1:05");
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(600.0), "10:00");
}

#[test]
fn pointer_mapping_is_monotonic_and_saturates() {
    let bar = BarGeometry::new(40.0, 300.0);
    let duration = Some(90.0);

    let mut previous = f64::MIN;
    for x in (0..=400).map(|x| x as f32) {
        let time = time_from_pointer(x, bar, duration);
        assert!(time >= previous, "not monotonic at x = {x}");
        previous = time;
    }
    assert_abs_diff_eq!(time_from_pointer(10.0, bar, duration), 0.0);
    assert_abs_diff_eq!(time_from_pointer(390.0, bar, duration), 90.0);
}

#[test]
fn volume_icons_partition_the_range() {
    assert_eq!(VolumeIcon::for_volume(Volume::new(0.0)), VolumeIcon::Muted);
    for step in 1..=100 {
        let volume = f64::from(step) / 100.0;
        let icon = VolumeIcon::for_volume(Volume::new(volume));
        let expected = if volume > 0.66 {
            VolumeIcon::Loud
        } else if volume > 0.33 {
            VolumeIcon::Medium
        } else {
            VolumeIcon::Low
        };
        assert_eq!(icon, expected, "volume {volume}");
    }
}

#[test]
fn first_toggle_requests_a_file_then_plays() {
    let mut player = unbound(120.0);
    let picker = CannedPicker(vec![
        MediaSource::new("first.mp4"),
        MediaSource::new("second.mp4"),
    ]);

    let dispatch = player.dispatch(ControlEvent::TogglePlayback);
    assert!(!player.is_playing());
    assert_eq!(dispatch.effects.len(), 1);

    settle_pick(&mut player, &dispatch.effects[0], &picker);

    assert!(player.is_playing());
    assert_eq!(
        player.media().source(),
        Some(&MediaSource::new("first.mp4"))
    );
    assert_eq!(player.chrome().source_name(), Some("first.mp4"));
    assert_eq!(player.chrome().duration_label(), "0:00 / 2:00");
}

#[test]
fn cancelled_pick_leaves_player_unset() {
    let mut player = unbound(120.0);
    let dispatch = player.dispatch(VideoEvent::Click);
    settle_pick(&mut player, &dispatch.effects[0], &CannedPicker(Vec::new()));

    assert!(!player.is_playing());
    assert!(player.media().source().is_none());

    // The next toggle asks again.
    let dispatch = player.dispatch(ControlEvent::TogglePlayback);
    assert_eq!(dispatch.effects.len(), 1);
}

#[test]
fn double_toggle_restores_state() {
    let mut player = bound(60.0);
    player.dispatch(ControlEvent::TogglePlayback);
    let playing = player.is_playing();
    let icon = player.chrome().playback_icon();

    player.dispatch(ControlEvent::TogglePlayback);
    player.dispatch(ControlEvent::TogglePlayback);

    assert_eq!(player.is_playing(), playing);
    assert_eq!(player.chrome().playback_icon(), icon);
    assert_eq!(icon, PlaybackIcon::Pause);
    assert!(player.chrome().play_overlay_visible());
    assert!(!player.chrome().pause_overlay_visible());
}

#[test]
fn arrow_right_five_times_skips_25_seconds() {
    let mut player = bound(50.0);
    player.dispatch(ControlEvent::TogglePlayback);

    for _ in 0..5 {
        player.dispatch(PageEvent::KeyDown(Key::ArrowRight));
    }
    assert_abs_diff_eq!(player.media().current_time(), 25.0);

    for _ in 0..5 {
        player.dispatch(PageEvent::KeyDown(Key::ArrowRight));
    }
    assert_abs_diff_eq!(player.media().current_time(), 50.0);

    player.dispatch(PageEvent::KeyDown(Key::ArrowLeft));
    assert_abs_diff_eq!(player.media().current_time(), 45.0);
}

#[test]
fn space_is_prevented_and_toggles() {
    let mut player = bound(30.0);
    let dispatch = player.dispatch(PageEvent::KeyDown(Key::Space));
    assert!(dispatch.default_prevented);
    assert!(player.is_playing());
}

#[test]
fn mouse_move_before_expiry_keeps_chrome_visible() {
    let start = Instant::now();
    let mut player = bound(600.0);
    player.dispatch(ControlEvent::TogglePlayback);

    player.dispatch(PlayerEvent::MouseMove(start));
    player.dispatch(PlayerEvent::Tick(start + Duration::from_secs(4)));
    player.dispatch(PlayerEvent::MouseMove(start + Duration::from_secs(4)));
    player.dispatch(PlayerEvent::Tick(start + Duration::from_secs(8)));
    player.dispatch(VideoEvent::TimeUpdate);

    assert!(!player.is_hidden_interface());
    assert!(!player.chrome().interface_hidden());

    player.dispatch(PlayerEvent::Tick(start + Duration::from_secs(10)));
    player.dispatch(VideoEvent::TimeUpdate);
    assert!(player.chrome().interface_hidden());
}

#[test]
fn rejected_fullscreen_leaves_flag_and_icon() {
    let mut player = bound(30.0);
    let dispatch = player.dispatch(VideoEvent::DoubleClick);
    assert_eq!(dispatch.effects, vec![Effect::RequestFullscreen]);

    player.dispatch(PlayerEvent::FullscreenSettled(Err(DisplayError::Unsupported)));

    assert!(!player.is_fullscreen());
    assert_eq!(player.chrome().fullscreen_icon(), FullscreenIcon::Expand);
}

#[test]
fn speed_menu_selection_sets_rate() {
    let mut player = bound(30.0);
    player.dispatch(ControlEvent::OpenSpeedMenu);
    assert!(player.chrome().speed_menu_open());

    player.dispatch(ControlEvent::SelectSpeed(3));
    assert!(player.media().playback_rate().same_as(PlaybackSpeed::new(2.0)));
    let active: Vec<bool> = player
        .chrome()
        .speed_options()
        .iter()
        .map(|option| option.active)
        .collect();
    assert_eq!(active, vec![false, false, false, true]);
}

struct BareHost {
    controls: Option<ControlSet>,
    with_video: bool,
}

impl PlayerHost for BareHost {
    type Media = ClockMedia<FixedProbe>;

    fn query(&mut self, _selector: &str) -> Option<PlayerMount<Self::Media>> {
        let controls = self.controls.clone()?;
        Some(PlayerMount {
            video: self.with_video.then(|| ClockMedia::new(FixedProbe(1.0))),
            controls,
        })
    }

    fn capabilities(&self) -> DisplayCapabilities {
        DisplayCapabilities::default()
    }
}

#[test]
fn mount_failures_are_reported() {
    let mut host = DesktopHost::new(ClockMedia::new(FixedProbe(1.0)), speeds());
    let err = PlayerController::mount(&mut host, "#missing", PlayerSettings::default())
        .expect_err("unknown container");
    assert_eq!(err, InitializationError::ContainerNotFound("#missing".into()));

    let mut host = BareHost {
        controls: Some(ControlSet::standard(speeds())),
        with_video: false,
    };
    let err = PlayerController::mount(&mut host, PLAYER_SELECTOR, PlayerSettings::default())
        .expect_err("no video");
    assert_eq!(err, InitializationError::VideoNotFound);
}

#[test]
fn disposed_player_ignores_input() {
    let mut player = bound(30.0);
    player.dispose();

    let dispatch = player.dispatch(PageEvent::KeyDown(Key::Space));
    assert!(dispatch.is_empty());
    assert!(!player.is_playing());
    assert!(!player.listens_to_page());
}
