// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures while reading a media source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// File exists but contains no video stream
    NoVideoStream,

    /// File appears corrupted or has invalid data
    CorruptedFile,

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),

    /// Generic error with raw message
    Other(String),
}

impl VideoError {
    /// Attempts to classify a raw error message from the decoder library.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return VideoError::IoError(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return VideoError::NoVideoStream;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return VideoError::CorruptedFile;
        }

        VideoError::Other(msg.to_string())
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::CorruptedFile => write!(f, "Video file is corrupted"),
            VideoError::IoError(msg) => write!(f, "I/O error: {}", msg),
            VideoError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for VideoError {}
