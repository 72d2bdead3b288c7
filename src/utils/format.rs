// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides numeric formatting helpers for student-bench, located in
// the utils subdirectory. It rounds scores for reproducible reporting and
// formats durations and timestamps for logs and the summary.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Utility functions for formatting benchmark values
pub struct FormatUtils;

impl FormatUtils {
    /// Round to 4 decimal digits, half away from zero
    pub fn round4(value: f64) -> f64 {
        (value * 10_000.0).round() / 10_000.0
    }

    /// Format a duration as seconds or milliseconds depending on magnitude
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs >= 1.0 {
            format!("{:.2}s", secs)
        } else {
            format!("{:.1}ms", secs * 1000.0)
        }
    }

    /// Seconds since the Unix epoch, 0.0 if the clock is before it
    pub fn unix_timestamp(now: SystemTime) -> f64 {
        now.duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(FormatUtils::round4(0.123456), 0.1235);
        assert_eq!(FormatUtils::round4(1.0), 1.0);
        assert_eq!(FormatUtils::round4(0.0), 0.0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(FormatUtils::format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(FormatUtils::format_duration(Duration::from_millis(250)), "250.0ms");
    }

    #[test]
    fn test_unix_timestamp() {
        assert_eq!(FormatUtils::unix_timestamp(UNIX_EPOCH), 0.0);
        let later = UNIX_EPOCH + Duration::from_secs(10);
        assert_eq!(FormatUtils::unix_timestamp(later), 10.0);
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Formatting helpers for benchmark reporting.
//   - Purpose: Rounds scores to 4 decimals and formats durations and
//     timestamps consistently across logs, the summary and the JSON record.
