// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/report/summary.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Fixed-format terminal summary of a benchmark record.

use crate::core::types::BenchmarkRecord;
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 50;

/// Render the summary block printed after a successful run
pub fn render_summary(record: &BenchmarkRecord) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_summary(&mut out, record);
    out
}

fn write_summary(out: &mut String, record: &BenchmarkRecord) -> fmt::Result {
    let system = &record.system_info;
    let student = &record.student_result;
    let scores = &record.performance_scores;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "BENCHMARK SUMMARY")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "System: {}", system.platform)?;
    writeln!(
        out,
        "CPU: {}C/{}T @ {:.0}MHz",
        system.cpu_count_physical, system.cpu_count_logical, system.cpu_freq_mhz
    )?;
    writeln!(out, "Memory: {:.1}GB", system.total_memory_gb)?;
    writeln!(out, "Exit Code: {}", student.exit_code)?;
    writeln!(out, "Execution Time: {:.2}s", student.elapsed_sec)?;
    writeln!(out, "Peak Memory: {:.1}MB", student.peak_memory_mb)?;
    writeln!(out, "Avg CPU Usage: {:.1}%", student.avg_cpu_percent)?;
    writeln!(out, "\nPerformance Scores:")?;
    writeln!(out, "  Compute Efficiency: {:.4}", scores.compute_efficiency)?;
    writeln!(out, "  Memory Efficiency:  {:.4}", scores.memory_efficiency)?;
    writeln!(out, "  Time Efficiency:    {:.4}", scores.time_efficiency)?;
    writeln!(out, "  Overall Score:      {:.4}", scores.overall_score)
}

pub fn print_summary(record: &BenchmarkRecord) {
    print!("{}", render_summary(record));
}
