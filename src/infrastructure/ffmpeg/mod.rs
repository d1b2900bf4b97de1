// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`MediaProbe`] port trait.
//!
//! [`FfmpegProbe`] opens the container, reads the best video stream's
//! parameters and closes the file again. No frame is decoded.

use std::sync::OnceLock;

use crate::application::port::MediaProbe;
use crate::domain::error::VideoError;
use crate::domain::media::{MediaInfo, MediaSource};

static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes `FFmpeg` once per process and quiets its logging.
///
/// The outcome of the first attempt is kept, so a failed initialization
/// keeps failing on later calls.
///
/// # Errors
///
/// Returns [`VideoError::Other`] if the library fails to initialize.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    init_once(&FFMPEG_INIT, || {
        ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
        Ok(())
    })
}

/// Runs `init` the first time `cell` is read and replays its outcome after.
fn init_once(
    cell: &OnceLock<Result<(), String>>,
    init: impl FnOnce() -> Result<(), String>,
) -> Result<(), VideoError> {
    cell.get_or_init(init).clone().map_err(VideoError::Other)
}

/// `FFmpeg`-based metadata probe.
///
/// # Example
///
/// ```ignore
/// use iced_reel::application::port::MediaProbe;
/// use iced_reel::domain::media::MediaSource;
/// use iced_reel::infrastructure::FfmpegProbe;
///
/// let info = FfmpegProbe.probe(&MediaSource::new("clip.mp4"))?;
/// println!("{}x{}, {:.1}s", info.width, info.height, info.duration_secs);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegProbe;

impl MediaProbe for FfmpegProbe {
    fn probe(&self, source: &MediaSource) -> Result<MediaInfo, VideoError> {
        init_ffmpeg()?;

        let ictx = ffmpeg_next::format::input(&source.path())
            .map_err(|e| VideoError::from_message(&e.to_string()))?;

        let video_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
                .map_err(|e| VideoError::from_message(&e.to_string()))?;
        let decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| VideoError::from_message(&e.to_string()))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(VideoError::CorruptedFile);
        }

        // Stream duration first, then the container's.
        let duration_secs = if video_stream.duration() > 0 {
            let time_base = video_stream.time_base();
            video_stream.duration() as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator())
        } else if ictx.duration() > 0 {
            ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            0.0
        };

        Ok(MediaInfo {
            duration_secs,
            width,
            height,
        })
    }
}
