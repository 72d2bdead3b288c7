// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for student-bench,
// located at the root of the source tree. It exports all public modules
// and types that the CLI and integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, benchmark, monitor, scoring, report, utils

pub mod benchmark;
pub mod core;
pub mod monitor;
pub mod report;
pub mod scoring;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{BenchmarkRunner, HardwareBenchmark, SystemProfiler};
pub use crate::core::{
    BenchConfig, BenchmarkMetrics, BenchmarkRecord, ExecutionResult, PerformanceScore, SystemInfo,
};
pub use crate::monitor::{MonitorError, ProcessMonitor};
pub use crate::scoring::PerformanceEvaluator;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0 (2026-10-18): Library root for student-bench.
//   - Purpose: Organizes the project into core, benchmark, monitor, scoring,
//     report and utils modules.
//   - Features: Re-exports the pipeline components and defines the common
//     Result type used by the orchestrator and the CLI.
