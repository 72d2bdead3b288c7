// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/config.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Run configuration shared by every component of the pipeline. It is built
// from the command line, validated once, and serialized into the output record.
//
// Tree Location:
// - src/core/config.rs (run configuration)
// - Depends on: serde, thiserror

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MATRIX_SIZE: usize = 512;
pub const DEFAULT_MEMORY_MB: usize = 200;
pub const DEFAULT_BASELINE_GFLOPS: f64 = 50.0;
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.1;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Matrix size must be greater than zero")]
    ZeroMatrixSize,

    #[error("Sample interval must be a positive number of seconds, got {value}")]
    InvalidSampleInterval { value: f64 },

    #[error("Timeout must be a positive number of seconds, got {value}")]
    InvalidTimeout { value: f64 },

    #[error("Baseline GFLOPS must be positive, got {value}")]
    InvalidBaseline { value: f64 },
}

/// Configuration for one full benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub matrix_size: usize,
    pub memory_mb: usize,
    pub timeout: Option<f64>,
    pub baseline_gflops: f64,
    pub sample_interval: f64,
}

impl BenchConfig {
    pub fn new(binary: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            args,
            matrix_size: DEFAULT_MATRIX_SIZE,
            memory_mb: DEFAULT_MEMORY_MB,
            timeout: None,
            baseline_gflops: DEFAULT_BASELINE_GFLOPS,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }

    /// Reject values that would make sampling or scoring meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix_size == 0 {
            return Err(ConfigError::ZeroMatrixSize);
        }
        if positive_duration(self.sample_interval).is_none() {
            return Err(ConfigError::InvalidSampleInterval {
                value: self.sample_interval,
            });
        }
        if let Some(timeout) = self.timeout {
            if positive_duration(timeout).is_none() {
                return Err(ConfigError::InvalidTimeout { value: timeout });
            }
        }
        if !(self.baseline_gflops.is_finite() && self.baseline_gflops > 0.0) {
            return Err(ConfigError::InvalidBaseline {
                value: self.baseline_gflops,
            });
        }
        Ok(())
    }

    /// Sample interval as a `Duration`, the default interval if unrepresentable
    pub fn sample_interval_duration(&self) -> Duration {
        positive_duration(self.sample_interval)
            .unwrap_or(Duration::from_millis((DEFAULT_SAMPLE_INTERVAL * 1000.0) as u64))
    }

    /// Timeout as a `Duration`; values `validate` rejects map to `None`
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.and_then(positive_duration)
    }
}

/// Seconds as a non-zero `Duration`, `None` for non-positive, non-finite or
/// overflowing values
fn positive_duration(seconds: f64) -> Option<Duration> {
    if seconds.is_nan() || seconds <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds)
        .ok()
        .filter(|duration| !duration.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflowing_durations_are_rejected() {
        let mut config = BenchConfig::new("/bin/true", vec![]);
        config.timeout = Some(1e20);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimeout { value: 1e20 }));
        assert_eq!(config.timeout_duration(), None);

        let mut config = BenchConfig::new("/bin/true", vec![]);
        config.sample_interval = 1e20;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSampleInterval { value: 1e20 })
        );
        assert_eq!(config.sample_interval_duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut config = BenchConfig::new("/bin/true", vec![]);
        config.timeout = Some(f64::INFINITY);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout { .. })));

        let mut config = BenchConfig::new("/bin/true", vec![]);
        config.sample_interval = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSampleInterval { .. })
        ));
    }

    #[test]
    fn test_valid_durations_convert() {
        let mut config = BenchConfig::new("/bin/true", vec![]);
        config.timeout = Some(2.5);
        config.sample_interval = 0.25;
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_duration(), Some(Duration::from_millis(2500)));
        assert_eq!(config.sample_interval_duration(), Duration::from_millis(250));
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Run configuration.
//   - Purpose: Defaults, validation and Duration accessors for one benchmark
//     run; serialized as the record's config member.
//   - Note: Durations are checked with try_from_secs_f64 so oversized values
//     fail validation instead of panicking.
