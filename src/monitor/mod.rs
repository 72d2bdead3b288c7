// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/monitor/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the monitor module, which executes the student binary
// and observes it through OS-level resource counters and its output streams.
//
// Tree Location:
// - src/monitor/mod.rs (monitor module entry point)
// - Submodules: process, sampler, output

pub mod output;
pub mod process;
pub mod sampler;

use std::path::PathBuf;
use thiserror::Error;

pub use process::ProcessMonitor;
pub use sampler::{ResourceProbe, ResourceSample, SampleAccumulator, SysinfoProbe};

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Binary not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to run student code {path:?}: {source}")]
    SpawnFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
