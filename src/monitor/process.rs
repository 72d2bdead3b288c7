// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/monitor/process.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the process execution engine. It launches the student
// binary, drains stdout and stderr on dedicated tasks, samples resident memory
// and CPU usage on the calling task, force-kills the process tree on timeout and
// returns a frozen ExecutionResult once every task has been joined.
//
// Tree Location:
// - src/monitor/process.rs (monitored execution of the student binary)
// - Depends on: tokio, sysinfo

use crate::core::config::{BenchConfig, DEFAULT_SAMPLE_INTERVAL};
use crate::core::types::ExecutionResult;
use crate::monitor::MonitorError;
use crate::monitor::output::{STDERR_LINE_LIMIT, STDOUT_LINE_LIMIT, drain_lines};
use crate::monitor::sampler::{ResourceProbe, SampleAccumulator, SysinfoProbe};
use crate::utils::format::FormatUtils;
use log::{debug, info, warn};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tokio::io::AsyncRead;
use tokio::process::Command;
use tokio::task::JoinHandle;

const LOG_TARGET: &str = "student_bench::monitor";

/// How the sampling loop ended
enum Termination {
    Exited(Option<ExitStatus>),
    Killed(Option<ExitStatus>),
}

/// Runs a target executable under observation
#[derive(Debug, Clone)]
pub struct ProcessMonitor {
    sample_interval: Duration,
    timeout: Option<Duration>,
}

impl ProcessMonitor {
    pub fn new(sample_interval: Duration, timeout: Option<Duration>) -> Self {
        Self {
            sample_interval,
            timeout,
        }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.sample_interval_duration(), config.timeout_duration())
    }

    pub fn sample_interval(&self) -> Duration {
        self.sample_interval
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Execute `executable` with `args` and observe it until it exits or is
    /// killed on timeout.
    pub async fn run(
        &self,
        executable: &Path,
        args: &[String],
    ) -> Result<ExecutionResult, MonitorError> {
        self.run_with_probe(executable, args, SysinfoProbe::new()).await
    }

    /// Same as [`run`](Self::run) with a caller-supplied resource probe
    pub async fn run_with_probe<P: ResourceProbe>(
        &self,
        executable: &Path,
        args: &[String],
        mut probe: P,
    ) -> Result<ExecutionResult, MonitorError> {
        if !executable.is_file() {
            return Err(MonitorError::NotFound {
                path: executable.to_path_buf(),
            });
        }

        let mut child = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| MonitorError::SpawnFailure {
                path: executable.to_path_buf(),
                source,
            })?;
        let start = Instant::now();
        let pid = child.id();
        info!(target: LOG_TARGET, "🚀 Spawned {:?} (pid {:?})", executable, pid);

        let stdout_task = spawn_drain(child.stdout.take(), STDOUT_LINE_LIMIT);
        let stderr_task = spawn_drain(child.stderr.take(), STDERR_LINE_LIMIT);

        let mut samples = SampleAccumulator::new();
        let mut sampling = pid.is_some();

        let (termination, elapsed) = loop {
            let elapsed = start.elapsed();
            if let Some(timeout) = self.timeout {
                if elapsed >= timeout {
                    warn!(target: LOG_TARGET,
                        "⏱️ Timeout of {} exceeded, killing process tree",
                        FormatUtils::format_duration(timeout)
                    );
                    if let Some(pid) = pid {
                        let killed = tokio::task::spawn_blocking(move || kill_process_tree(pid))
                            .await
                            .unwrap_or(0);
                        if killed > 0 {
                            debug!(target: LOG_TARGET, "Killed {} descendant process(es)", killed);
                        }
                    }
                    if let Err(e) = child.start_kill() {
                        debug!(target: LOG_TARGET, "Kill failed, process already gone: {}", e);
                    }
                    let status = child.wait().await.ok();
                    break (Termination::Killed(status), elapsed);
                }
            }

            if sampling {
                match pid.and_then(|pid| probe.sample(pid)) {
                    Some(sample) => samples.record(sample),
                    None => {
                        debug!(target: LOG_TARGET,
                            "Process no longer observable after {} samples, sampling stopped",
                            samples.sample_count()
                        );
                        sampling = false;
                    }
                }
            }

            let mut nap = self.sample_interval;
            if let Some(timeout) = self.timeout {
                nap = nap.min(timeout.saturating_sub(start.elapsed()));
            }

            tokio::select! {
                status = child.wait() => {
                    let elapsed = start.elapsed();
                    match status {
                        Ok(status) => break (Termination::Exited(Some(status)), elapsed),
                        Err(e) => {
                            warn!(target: LOG_TARGET, "Failed to read exit status: {}", e);
                            break (Termination::Exited(None), elapsed);
                        }
                    }
                }
                _ = tokio::time::sleep(nap) => {}
            }
        };

        let stdout_lines = join_drain(stdout_task, "stdout").await;
        let stderr_lines = join_drain(stderr_task, "stderr").await;

        let (status, timed_out) = match termination {
            Termination::Exited(status) => (status, false),
            Termination::Killed(status) => (status, true),
        };
        let exit_code = decode_exit_status(status);

        let result = ExecutionResult {
            exit_code,
            elapsed_sec: elapsed.as_secs_f64(),
            peak_memory_mb: samples.peak_memory_mb(),
            avg_cpu_percent: samples.average_cpu_percent(),
            stdout_lines,
            stderr_lines,
            timed_out,
        };

        info!(target: LOG_TARGET,
            "🏁 Exit code {} after {} | peak {:.1}MB | avg CPU {:.1}% | {} samples",
            result.exit_code,
            FormatUtils::format_duration(elapsed),
            result.peak_memory_mb,
            result.avg_cpu_percent,
            samples.sample_count()
        );
        Ok(result)
    }
}

impl Default for ProcessMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(DEFAULT_SAMPLE_INTERVAL), None)
    }
}

/// Force-kill `root` and every live descendant, returning how many
/// descendants were signalled.
///
/// The tree is collected before anything is signalled, and `root` dies first
/// so it cannot react to a descendant's death.
fn kill_process_tree(root: u32) -> usize {
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing(),
    );

    let mut tree = vec![Pid::from_u32(root)];
    let mut next = 0;
    while next < tree.len() {
        let parent = tree[next];
        let children: Vec<Pid> = system
            .processes()
            .iter()
            .filter(|(pid, process)| {
                process.thread_kind().is_none()
                    && process.parent() == Some(parent)
                    && !tree.contains(pid)
            })
            .map(|(pid, _)| *pid)
            .collect();
        tree.extend(children);
        next += 1;
    }

    if let Some(process) = system.process(tree[0]) {
        process.kill();
    }
    tree.iter()
        .skip(1)
        .filter_map(|pid| system.process(*pid))
        .filter(|process| process.kill())
        .count()
}

fn spawn_drain<R>(stream: Option<R>, limit: usize) -> Option<JoinHandle<Vec<String>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    stream.map(|stream| tokio::spawn(drain_lines(stream, limit)))
}

async fn join_drain(task: Option<JoinHandle<Vec<String>>>, name: &str) -> Vec<String> {
    match task {
        Some(handle) => handle.await.unwrap_or_else(|e| {
            warn!(target: LOG_TARGET, "{} drain task failed: {}", name, e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}

/// Map an exit status to the recorded exit code.
///
/// A numeric code is used as-is; on Unix a signal-terminated process reports
/// the negated signal number. A status that could not be obtained maps to 0,
/// which is indistinguishable from success in the scores.
pub fn decode_exit_status(status: Option<ExitStatus>) -> i32 {
    let Some(status) = status else {
        warn!(target: LOG_TARGET, "Exit status unavailable, recording exit code 0");
        return 0;
    };
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    warn!(target: LOG_TARGET, "Exit status {:?} has no code, recording exit code 0", status);
    0
}


// Changelog:
// - v1.0.0 (2026-10-18): Monitored execution of the student binary.
//   - Purpose: Spawn, drain, sample, enforce the timeout and decode the exit
//     status into an ExecutionResult.
//   - Note: A timeout kills the child's descendants too, so a forked helper
//     holding the pipes cannot keep the drains open.
