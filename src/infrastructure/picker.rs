// SPDX-License-Identifier: MPL-2.0
//! Native file dialog adapter implementing the [`SourcePicker`] port.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::application::port::SourcePicker;
use crate::domain::media::{MediaFilter, MediaSource};

/// Picks sources through `rfd`'s asynchronous dialog.
#[derive(Debug, Clone, Default)]
pub struct RfdSourcePicker {
    title: Option<String>,
    directory: Option<PathBuf>,
}

impl RfdSourcePicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dialog title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the directory the dialog opens in, when it exists.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }
}

impl SourcePicker for RfdSourcePicker {
    fn open(&self, filter: &MediaFilter, multiple: bool) -> BoxFuture<'static, Vec<MediaSource>> {
        let mut dialog =
            rfd::AsyncFileDialog::new().add_filter(&filter.name, filter.extensions.as_slice());

        if let Some(title) = &self.title {
            dialog = dialog.set_title(title);
        }
        if let Some(dir) = &self.directory {
            if dir.exists() {
                dialog = dialog.set_directory(dir);
            }
        }

        async move {
            // The dialog is consumed here and gone once the future resolves.
            let handles = if multiple {
                dialog.pick_files().await.unwrap_or_default()
            } else {
                dialog.pick_file().await.into_iter().collect()
            };
            handles
                .iter()
                .map(|handle| MediaSource::new(handle.path()))
                .collect()
        }
        .boxed()
    }
}
