// SPDX-License-Identifier: MPL-2.0
//! Accept filter handed to the source picker.

/// Video file extensions accepted by the picker.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Which files the source picker offers, in the spirit of an `accept`
/// attribute such as `video/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFilter {
    /// Human-readable filter name shown by native dialogs.
    pub name: String,
    /// Lower-case extensions without the leading dot.
    pub extensions: Vec<String>,
}

impl MediaFilter {
    /// Filter matching every supported video container.
    #[must_use]
    pub fn video() -> Self {
        Self {
            name: "Video".to_string(),
            extensions: VIDEO_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }

    /// Builds a filter from a MIME-style accept string.
    ///
    /// `video/*` yields the video filter; a comma-separated list of
    /// extensions (`.mp4,.webm`) yields exactly those.
    #[must_use]
    pub fn from_accept(accept: &str) -> Self {
        let accept = accept.trim();
        if accept.is_empty() || accept.eq_ignore_ascii_case("video/*") {
            return Self::video();
        }
        let extensions: Vec<String> = accept
            .split(',')
            .map(|part| part.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
            .collect();
        if extensions.is_empty() {
            return Self::video();
        }
        Self {
            name: "Media".to_string(),
            extensions,
        }
    }

    /// Returns true if the file name carries an accepted extension.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|accepted| *accepted == ext))
    }
}

impl Default for MediaFilter {
    fn default() -> Self {
        Self::video()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_wildcard_maps_to_video_extensions() {
        let filter = MediaFilter::from_accept("video/*");
        assert_eq!(filter, MediaFilter::video());
        assert!(filter.matches("clip.MP4"));
        assert!(!filter.matches("photo.png"));
    }

    #[test]
    fn explicit_extensions_are_normalized() {
        let filter = MediaFilter::from_accept(".MP4, webm");
        assert_eq!(filter.extensions, vec!["mp4", "webm"]);
        assert!(filter.matches("a.webm"));
        assert!(!filter.matches("a.mkv"));
    }

    #[test]
    fn files_without_extension_never_match() {
        assert!(!MediaFilter::video().matches("README"));
    }
}
