// SPDX-License-Identifier: MPL-2.0
//! Source picker port definition.

use crate::domain::media::{MediaFilter, MediaSource};
use futures_util::future::BoxFuture;

/// Port for asking the user which file to play.
///
/// # Example
///
/// ```ignore
/// use futures_util::FutureExt;
///
/// let files = picker.open(&MediaFilter::video(), false).now_or_never();
/// ```
pub trait SourcePicker: Send + Sync {
    /// Opens the picker.
    ///
    /// Resolves with the chosen file, every chosen file when `multiple` is
    /// set, or an empty list when the user cancels.
    fn open(&self, filter: &MediaFilter, multiple: bool) -> BoxFuture<'static, Vec<MediaSource>>;
}
