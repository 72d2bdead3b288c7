// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scoring/evaluator.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file turns a hardware baseline, an execution result and the host
// snapshot into normalized efficiency scores. Scoring is a pure function of
// its inputs so identical runs always report identical scores.
//
// Tree Location:
// - src/scoring/evaluator.rs (efficiency scoring)
// - Depends on: core/types, utils/format

use crate::core::config::DEFAULT_BASELINE_GFLOPS;
use crate::core::types::{BenchmarkMetrics, ExecutionResult, PerformanceScore, SystemInfo};
use crate::utils::format::FormatUtils;

pub const COMPUTE_WEIGHT: f64 = 0.4;
pub const MEMORY_WEIGHT: f64 = 0.3;
pub const TIME_WEIGHT: f64 = 0.3;

/// CPU utilization that earns the full compute factor
const TARGET_CPU_PERCENT: f64 = 80.0;

/// Bandwidth (GB/s) at which the memory score is unscaled
const REFERENCE_BANDWIDTH_GBPS: f64 = 20.0;
const MAX_BANDWIDTH_FACTOR: f64 = 1.2;

/// Runtime (s) of the notional fixed-cost task on a baseline-speed machine
const REFERENCE_TASK_SECONDS: f64 = 10.0;

/// Clamp to [0, 1], mapping NaN to 0
fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Scores executions relative to the measured hardware
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceEvaluator {
    baseline_gflops: f64,
}

impl PerformanceEvaluator {
    pub fn new(baseline_gflops: f64) -> Self {
        Self { baseline_gflops }
    }

    pub fn baseline_gflops(&self) -> f64 {
        self.baseline_gflops
    }

    pub fn calculate_scores(
        &self,
        benchmark: &BenchmarkMetrics,
        result: &ExecutionResult,
        system: &SystemInfo,
    ) -> PerformanceScore {
        let compute = FormatUtils::round4(Self::compute_efficiency(
            benchmark.gflops,
            result.elapsed_sec,
            result.avg_cpu_percent,
        ));
        let memory = FormatUtils::round4(Self::memory_efficiency(
            benchmark.memory_bandwidth_gbps,
            result.peak_memory_mb,
            system.total_memory_gb,
        ));
        let time = FormatUtils::round4(self.time_efficiency(result.elapsed_sec, benchmark.gflops));

        let overall = COMPUTE_WEIGHT * compute + MEMORY_WEIGHT * memory + TIME_WEIGHT * time;

        PerformanceScore {
            compute_efficiency: compute,
            memory_efficiency: memory,
            time_efficiency: time,
            overall_score: FormatUtils::round4(clamp01(overall)),
        }
    }

    /// Host throughput per second of runtime, scaled by how close CPU usage
    /// sits to 80%. A CPU average of exactly 0 means unmeasured.
    pub fn compute_efficiency(sys_gflops: f64, elapsed_sec: f64, cpu_usage: f64) -> f64 {
        if elapsed_sec <= 0.0 || sys_gflops <= 0.0 {
            return 0.0;
        }
        let base_score = (sys_gflops / elapsed_sec) / 100.0;
        let cpu_factor = if cpu_usage == 0.0 {
            1.0
        } else {
            ((100.0 - (cpu_usage - TARGET_CPU_PERCENT).abs()) / 100.0).min(1.0)
        };
        clamp01(base_score * cpu_factor)
    }

    /// Step penalty on the share of host memory used, scaled by bandwidth
    pub fn memory_efficiency(sys_bandwidth_gbps: f64, peak_memory_mb: f64, total_memory_gb: f64) -> f64 {
        if total_memory_gb <= 0.0 || peak_memory_mb <= 0.0 {
            return 1.0;
        }
        let usage_ratio = peak_memory_mb / (total_memory_gb * 1024.0);
        let tier = Self::memory_tier(usage_ratio);
        let bandwidth_factor = (sys_bandwidth_gbps / REFERENCE_BANDWIDTH_GBPS).min(MAX_BANDWIDTH_FACTOR);
        clamp01(tier * bandwidth_factor)
    }

    /// Efficiency tier for a peak-memory to total-memory ratio
    pub fn memory_tier(usage_ratio: f64) -> f64 {
        if usage_ratio > 0.8 {
            0.2
        } else if usage_ratio > 0.5 {
            0.6
        } else if usage_ratio > 0.2 {
            0.9
        } else {
            1.0
        }
    }

    /// Full score when the run finishes within the time a baseline-speed
    /// machine would need, scaled down beyond it.
    pub fn time_efficiency(&self, elapsed_sec: f64, sys_gflops: f64) -> f64 {
        if elapsed_sec <= 0.0 || sys_gflops <= 0.0 || self.baseline_gflops <= 0.0 {
            return 0.0;
        }
        let expected = self.expected_time(sys_gflops);
        if elapsed_sec > expected {
            clamp01(expected / elapsed_sec)
        } else {
            1.0
        }
    }

    /// Seconds the reference task should take on a host of `sys_gflops`
    pub fn expected_time(&self, sys_gflops: f64) -> f64 {
        REFERENCE_TASK_SECONDS / (sys_gflops / self.baseline_gflops)
    }
}

impl Default for PerformanceEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE_GFLOPS)
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Performance evaluator.
//   - Purpose: Normalizes compute, memory and time behavior of the student
//     binary against the host baseline and combines them 0.4/0.3/0.3.
//   - Note: Non-positive inputs score 0.0 and every result is clamped to
//     [0, 1] and rounded to 4 decimals.
