// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/monitor/sampler.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides the resource sampling used while a student binary runs:
// a probe that reads one process's resident memory and CPU utilization from
// the OS, and an accumulator that folds samples into a running peak and a CPU
// sample list.
//
// Tree Location:
// - src/monitor/sampler.rs (per-process resource sampling)
// - Depends on: sysinfo

use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One reading of a monitored process
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSample {
    /// Resident set size in bytes
    pub rss_bytes: u64,

    /// CPU utilization since the previous reading, 100.0 per saturated core
    pub cpu_percent: f64,
}

/// Source of resource samples for a process id
pub trait ResourceProbe: Send {
    /// Read the current usage of `pid`, or `None` once the process can no
    /// longer be observed.
    fn sample(&mut self, pid: u32) -> Option<ResourceSample>;
}

/// CPU percent from consumed CPU time over elapsed wall time.
///
/// 100.0 per fully used core. A counter that went backwards or a zero wall
/// delta yields 0.0.
pub fn cpu_percent_between(previous_cpu_ms: u64, current_cpu_ms: u64, wall: Duration) -> f64 {
    let wall_ms = wall.as_secs_f64() * 1000.0;
    if wall_ms <= 0.0 || current_cpu_ms < previous_cpu_ms {
        return 0.0;
    }
    (current_cpu_ms - previous_cpu_ms) as f64 / wall_ms * 100.0
}

/// CPU counter reading kept between samples
#[derive(Debug, Clone, Copy)]
struct CpuReading {
    pid: Pid,
    cpu_ms: u64,
    at: Instant,
}

/// Probe backed by sysinfo's process table.
///
/// CPU utilization is the process's accumulated CPU time between consecutive
/// samples divided by the wall time between them. The first reading for a pid
/// reports 0.0.
pub struct SysinfoProbe {
    system: System,
    last_cpu: Option<CpuReading>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            last_cpu: None,
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceProbe for SysinfoProbe {
    fn sample(&mut self, pid: u32) -> Option<ResourceSample> {
        let pid = Pid::from_u32(pid);
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let process = self.system.process(pid)?;
        let reading = CpuReading {
            pid,
            cpu_ms: process.accumulated_cpu_time(),
            at: Instant::now(),
        };
        let cpu_percent = match self.last_cpu {
            Some(last) if last.pid == pid => {
                cpu_percent_between(last.cpu_ms, reading.cpu_ms, reading.at - last.at)
            }
            _ => 0.0,
        };
        self.last_cpu = Some(reading);

        Some(ResourceSample {
            rss_bytes: process.memory(),
            cpu_percent,
        })
    }
}

/// Running peak memory and positive CPU samples
#[derive(Debug, Clone, Default)]
pub struct SampleAccumulator {
    peak_rss_bytes: u64,
    cpu_samples: Vec<f64>,
    sample_count: usize,
}

impl SampleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: ResourceSample) {
        self.sample_count += 1;
        self.peak_rss_bytes = self.peak_rss_bytes.max(sample.rss_bytes);
        // Zero readings right after spawn mean the OS has no counters yet
        if sample.cpu_percent > 0.0 {
            self.cpu_samples.push(sample.cpu_percent);
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_rss_bytes as f64 / BYTES_PER_MB
    }

    /// Mean of the positive CPU samples, 0.0 when none were taken
    pub fn average_cpu_percent(&self) -> f64 {
        if self.cpu_samples.is_empty() {
            return 0.0;
        }
        self.cpu_samples.iter().sum::<f64>() / self.cpu_samples.len() as f64
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Per-process resource sampling.
//   - Purpose: Peak resident memory and mean CPU utilization of the student
//     binary, behind a probe trait so the monitor can be driven by fakes.
//   - Note: sysinfo's cpu_usage only advances every 200ms; CPU percent uses
//     accumulated CPU time deltas instead.
