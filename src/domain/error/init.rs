// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Raised when a player cannot be mounted on its container.
///
/// Mounting is all-or-nothing: when this is returned no controller exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitializationError {
    /// No container matches the selector.
    ContainerNotFound(String),
    /// The container has no video element.
    VideoNotFound,
    /// A named control of the player markup is absent.
    MissingControl(&'static str),
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializationError::ContainerNotFound(selector) => {
                write!(f, "Player container not found: {}", selector)
            }
            InitializationError::VideoNotFound => write!(f, "Player video not found"),
            InitializationError::MissingControl(name) => {
                write!(f, "Player control not found: {}", name)
            }
        }
    }
}

impl std::error::Error for InitializationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_selector() {
        let err = InitializationError::ContainerNotFound(".player".into());
        assert_eq!(err.to_string(), "Player container not found: .player");
    }

    #[test]
    fn display_names_the_control() {
        let err = InitializationError::MissingControl("volume-input");
        assert!(err.to_string().contains("volume-input"));
    }
}
