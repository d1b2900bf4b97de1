// SPDX-License-Identifier: MPL-2.0
//! Media probing port definition.

use crate::domain::error::VideoError;
use crate::domain::media::{MediaInfo, MediaSource};

/// Port for reading duration and frame size from a source.
///
/// Probing must not decode frames; it runs on the UI thread when a source
/// is bound.
pub trait MediaProbe {
    /// Reads the metadata of `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] if the file cannot be opened or holds no
    /// video stream.
    fn probe(&self, source: &MediaSource) -> Result<MediaInfo, VideoError>;
}
