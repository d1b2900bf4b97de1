// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Playback positions, volumes and bar geometry are floats, so tests compare
//! them with the `approx` assertion macros instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for pixel geometry (`f32`).
pub const F32_EPSILON: f32 = 1e-4;

/// Tolerance for times and volumes (`f64`).
pub const F64_EPSILON: f64 = 1e-9;
