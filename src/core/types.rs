// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for student-bench, located in the
// core subdirectory. It includes the command-line arguments, the host
// snapshot, hardware baseline metrics, the monitored execution result, the
// derived scores and the composite record written to disk.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use crate::core::config::BenchConfig;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments for student-bench
#[derive(Parser, Debug)]
#[command(
    name = "student-bench",
    author = "Student Bench Team",
    version,
    about = "Student code performance benchmark",
    long_about = "Student Bench measures this machine's compute throughput and memory bandwidth,\n\
                  runs the student binary while sampling its memory and CPU usage, and scores the\n\
                  run relative to the measured hardware so results compare across machines.\n\n\
                  Examples:\n\
                    Basic: student-bench --binary ./solution\n\
                    With arguments: student-bench --binary ./solution -- input.txt 100\n\
                    With timeout: student-bench --binary ./solution --timeout 30 --output run.json"
)]
pub struct Args {
    /// Path to the student binary to execute
    #[arg(
        long,
        value_name = "PATH",
        help = "Path to student binary"
    )]
    pub binary: PathBuf,

    /// JSON file receiving the full benchmark record
    #[arg(
        long,
        default_value = "benchmark_results.json",
        value_name = "FILE",
        help = "Output JSON file"
    )]
    pub output: PathBuf,

    /// Matrix dimension for the compute benchmark (N x N single precision)
    #[arg(
        long,
        default_value = "512",
        value_name = "N",
        help = "Matrix size for compute benchmark"
    )]
    pub matrix_size: usize,

    /// Buffer size in MB for the memory bandwidth benchmark
    #[arg(
        long,
        default_value = "200",
        value_name = "MB",
        help = "Memory size for bandwidth test (MB)"
    )]
    pub memory_mb: usize,

    /// Wall-clock limit for the student binary; it is killed when exceeded
    #[arg(
        long,
        value_name = "SECONDS",
        help = "Timeout for student code (seconds)"
    )]
    pub timeout: Option<f64>,

    /// Reference machine speed used to normalize time efficiency
    #[arg(
        long,
        default_value = "50.0",
        value_name = "GFLOPS",
        help = "Baseline GFLOPS for normalization"
    )]
    pub baseline_gflops: f64,

    /// Interval between memory/CPU samples of the student process
    #[arg(
        long,
        default_value = "0.1",
        value_name = "SECONDS",
        help = "Sampling interval for memory/CPU usage (seconds)"
    )]
    pub sample_interval: f64,

    /// Log level for the console logger (error, warn, info, debug, trace)
    #[arg(
        long,
        default_value = "info",
        value_name = "LEVEL",
        help = "Console log level"
    )]
    pub log_level: String,

    /// Optional log4rs YAML configuration, overrides --log-level
    #[arg(
        long,
        value_name = "FILE",
        help = "log4rs configuration file"
    )]
    pub log_config: Option<PathBuf>,

    /// Arguments passed through to the student binary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Args {
    /// Build the run configuration recorded alongside the results
    pub fn to_config(&self) -> BenchConfig {
        BenchConfig {
            binary: self.binary.clone(),
            args: self.args.clone(),
            matrix_size: self.matrix_size,
            memory_mb: self.memory_mb,
            timeout: self.timeout,
            baseline_gflops: self.baseline_gflops,
            sample_interval: self.sample_interval,
        }
    }
}

/// Static host capability facts, captured once per run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Physical core count, at least 1
    pub cpu_count_physical: usize,

    /// Logical core count, at least 1
    pub cpu_count_logical: usize,

    /// Current CPU frequency in MHz, 0.0 if unavailable
    pub cpu_freq_mhz: f64,

    /// Total physical memory in GB, 0.0 if unavailable
    pub total_memory_gb: f64,

    /// OS name, kernel version and architecture
    pub platform: String,

    /// Name and version of the benchmarking tool
    pub runtime_version: String,
}

/// Hardware baseline produced by the micro-benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub gflops: f64,
    pub memory_bandwidth_gbps: f64,
    pub benchmark_time_ms: f64,
}

/// Outcome of one monitored execution of the student binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Exit code; negative signal number on Unix when killed by a signal
    pub exit_code: i32,

    /// Wall-clock seconds from spawn to observed exit or forced kill
    pub elapsed_sec: f64,

    /// Maximum resident memory over all samples, in MB
    pub peak_memory_mb: f64,

    /// Mean of the positive CPU samples, may exceed 100 on multi-core
    pub avg_cpu_percent: f64,

    /// First non-blank stdout lines
    pub stdout_lines: Vec<String>,

    /// First non-blank stderr lines
    pub stderr_lines: Vec<String>,

    /// Whether the process was force-killed on timeout
    #[serde(default)]
    pub timed_out: bool,
}

/// Normalized efficiency scores, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceScore {
    pub compute_efficiency: f64,
    pub memory_efficiency: f64,
    pub time_efficiency: f64,
    pub overall_score: f64,
}

/// The composite unit of output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Seconds since the Unix epoch
    pub timestamp: f64,
    pub system_info: SystemInfo,
    pub benchmark_metrics: BenchmarkMetrics,
    pub student_result: ExecutionResult,
    pub performance_scores: PerformanceScore,
    pub config: BenchConfig,
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial data model.
//   - Purpose: Defines the records exchanged between the profiler, hardware
//     benchmark, process monitor, evaluator and report writer.
//   - Note: Field names of the serialized record match the JSON layout
//     consumed by existing result tooling (system_info, student_result, ...).
