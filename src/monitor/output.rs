// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/monitor/output.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Output stream draining for monitored processes. A drain reads its stream to
// end-of-file so the child never stalls on a full pipe, and keeps only the
// first non-blank lines.

use log::debug;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

const LOG_TARGET: &str = "student_bench::output";

pub const STDOUT_LINE_LIMIT: usize = 20;
pub const STDERR_LINE_LIMIT: usize = 10;

/// Read `stream` to completion, returning up to `limit` trimmed non-blank
/// lines in the order they were produced. Read errors end the drain with
/// whatever was collected so far.
pub async fn drain_lines<R>(stream: R, limit: usize) -> Vec<String>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut dropped = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if lines.len() < limit {
                    lines.push(line.to_string());
                } else {
                    dropped += 1;
                }
            }
            Err(e) => {
                debug!(target: LOG_TARGET, "Stream read failed, keeping {} lines: {}", lines.len(), e);
                break;
            }
        }
    }

    if dropped > 0 {
        debug!(target: LOG_TARGET, "Discarded {} lines beyond the limit of {}", dropped, limit);
    }
    lines
}


// Changelog:
// - v1.0.0 (2026-10-18): Stream drains for the monitored process.
//   - Purpose: Keep the first N non-blank lines of stdout/stderr while
//     reading each stream to EOF so the child never blocks on a full pipe.
