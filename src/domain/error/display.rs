// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Rejection of a fullscreen or picture-in-picture request.
///
/// These never reach the user: the player restores its controls and
/// discards the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The host or the user refused the request.
    Rejected(String),
    /// The host cannot honour the request in its current state.
    Unsupported,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Rejected(reason) => write!(f, "Display request rejected: {}", reason),
            DisplayError::Unsupported => write!(f, "Display request unsupported"),
        }
    }
}

impl std::error::Error for DisplayError {}
