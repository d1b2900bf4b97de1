// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::path::{Path, PathBuf};

/// A playable media source chosen by the user.
///
/// Bound to the media element at most once per session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource {
    path: PathBuf,
}

impl MediaSource {
    /// Creates a source from a file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path of the source.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Metadata read from a source before playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaInfo {
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

/// How much of the media the element has available.
///
/// Mirrors the `HAVE_*` ladder of a media element; only the first rung
/// matters to the player chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ReadyState {
    /// Nothing is known about the media.
    #[default]
    HaveNothing,
    /// Duration and dimensions are known.
    HaveMetadata,
    /// Enough data is available to play.
    HaveEnoughData,
}

impl ReadyState {
    /// Returns true once at least the metadata is known.
    #[must_use]
    pub fn has_metadata(self) -> bool {
        self >= Self::HaveMetadata
    }
}
