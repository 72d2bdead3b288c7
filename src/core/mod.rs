// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core data model of
// student-bench. It declares the shared record types and the run
// configuration used by every other module.
//
// Tree Location:
// - src/core/mod.rs (core module entry point)
// - Submodules: types, config

pub mod config;
pub mod types;

pub use config::{BenchConfig, ConfigError};
pub use types::{
    Args, BenchmarkMetrics, BenchmarkRecord, ExecutionResult, PerformanceScore, SystemInfo,
};
