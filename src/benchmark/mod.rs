// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the benchmark module for host characterization and run
// orchestration. It provides the system profiler, the hardware
// micro-benchmarks and the runner that ties the pipeline together.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: hardware, profiler, runner

pub mod hardware;
pub mod profiler;
pub mod runner;

// Re-export key benchmark types
pub use hardware::HardwareBenchmark;
pub use profiler::SystemProfiler;
pub use runner::BenchmarkRunner;

// Changelog:
// - v1.0.0 (2026-10-18): Benchmark module for student-bench.
//   - Purpose: Groups host profiling, micro-benchmarks and orchestration.
