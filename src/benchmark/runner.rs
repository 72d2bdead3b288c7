// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the benchmark orchestrator. It characterizes the host,
// runs the student binary under the process monitor, scores the run and
// assembles the composite record handed to the report writer.

use crate::Result;
use crate::benchmark::hardware::HardwareBenchmark;
use crate::benchmark::profiler::SystemProfiler;
use crate::core::config::BenchConfig;
use crate::core::types::BenchmarkRecord;
use crate::monitor::ProcessMonitor;
use crate::scoring::PerformanceEvaluator;
use crate::utils::format::FormatUtils;
use log::info;
use std::time::SystemTime;

const LOG_TARGET: &str = "student_bench::runner";

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchConfig,
    hardware: HardwareBenchmark,
    monitor: ProcessMonitor,
    evaluator: PerformanceEvaluator,
}

impl BenchmarkRunner {
    /// Build a runner after validating `config`
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            hardware: HardwareBenchmark::new(config.matrix_size, config.memory_mb),
            monitor: ProcessMonitor::from_config(&config),
            evaluator: PerformanceEvaluator::new(config.baseline_gflops),
            config,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Profile, benchmark, execute and score, in that order
    pub async fn run_full_benchmark(&self) -> Result<BenchmarkRecord> {
        info!(target: LOG_TARGET, "🔍 Gathering system information...");
        let system_info = SystemProfiler::get_system_info();

        info!(target: LOG_TARGET,
            "🧪 Running hardware benchmark ({}x{} matrix, {} MB buffer)...",
            self.config.matrix_size, self.config.matrix_size, self.config.memory_mb
        );
        let hardware = self.hardware.clone();
        let benchmark_metrics = tokio::task::spawn_blocking(move || hardware.run_benchmark()).await?;

        info!(target: LOG_TARGET, "🚀 Running student code: {:?}", self.config.binary);
        let student_result = self
            .monitor
            .run(&self.config.binary, &self.config.args)
            .await?;

        info!(target: LOG_TARGET, "📊 Calculating performance scores...");
        let performance_scores =
            self.evaluator
                .calculate_scores(&benchmark_metrics, &student_result, &system_info);

        Ok(BenchmarkRecord {
            timestamp: FormatUtils::unix_timestamp(SystemTime::now()),
            system_info,
            benchmark_metrics,
            student_result,
            performance_scores,
            config: self.config.clone(),
        })
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Benchmark orchestrator.
//   - Purpose: Sequences the system profiler, hardware benchmark, process
//     monitor and evaluator, propagating only configuration, not-found and
//     spawn failures.
//   - Note: The CPU-bound hardware benchmark runs on a blocking thread so
//     the async runtime stays responsive.
