// SPDX-License-Identifier: MPL-2.0
//! Time labels shown by the timeline and the duration readout.

/// Formats a position as `M:SS`.
///
/// Minutes are not padded and not folded into hours; fractional seconds are
/// truncated. Negative and non-finite inputs read as zero.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Builds the `"<current> / <duration>"` readout.
///
/// Both values are rounded to whole seconds first. An unknown duration
/// reads as `0:00`.
#[must_use]
pub fn duration_label(current: f64, duration: Option<f64>) -> String {
    format!(
        "{} / {}",
        format_time(round_secs(current)),
        format_time(round_secs(duration.unwrap_or(0.0)))
    )
}

/// Percentage of the rounded duration covered by the rounded position.
///
/// Returns `0.0` when the duration is unknown or rounds to zero.
#[must_use]
pub fn progress_percent(current: f64, duration: Option<f64>) -> f64 {
    let duration = round_secs(duration.unwrap_or(0.0));
    if duration <= 0.0 {
        return 0.0;
    }
    (round_secs(current) / (duration / 100.0)).clamp(0.0, 100.0)
}

fn round_secs(value: f64) -> f64 {
    if value.is_finite() {
        value.round()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn format_time_truncates_fractions() {
        assert_eq!(format_time(65.9), "1:05");
    }

    #[test]
    fn format_time_keeps_minutes_unpadded() {
        assert_eq!(format_time(3665.0), "61:05");
    }

    #[test]
    fn format_time_handles_negative_and_nan() {
        assert_eq!(format_time(-10.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn duration_label_rounds_both_sides() {
        assert_eq!(duration_label(4.6, Some(59.5)), "0:05 / 1:00");
    }

    #[test]
    fn duration_label_without_duration() {
        assert_eq!(duration_label(0.0, None), "0:00 / 0:00");
    }

    #[test]
    fn progress_uses_rounded_values() {
        assert_abs_diff_eq!(progress_percent(24.6, Some(100.2)), 25.0);
    }

    #[test]
    fn progress_is_zero_without_duration() {
        assert_abs_diff_eq!(progress_percent(12.0, None), 0.0);
        assert_abs_diff_eq!(progress_percent(12.0, Some(0.2)), 0.0);
    }
}
