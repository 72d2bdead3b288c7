// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/monitor_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains tests for the process monitor. The synthetic_workload
// binary built with this package serves as a controllable target; the
// timeout test uses the system sleep utility.
//
// Tree Location:
// - tests/monitor_test.rs (process monitor tests)
// - Depends on: student-bench, tokio, tempfile

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use student_bench::monitor::{
        MonitorError, ProcessMonitor, ResourceProbe, ResourceSample,
    };

    const WORKLOAD: &str = env!("CARGO_BIN_EXE_synthetic_workload");

    fn workload() -> &'static Path {
        Path::new(WORKLOAD)
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn fast_monitor(timeout: Option<f64>) -> ProcessMonitor {
        ProcessMonitor::new(
            Duration::from_millis(20),
            timeout.map(Duration::from_secs_f64),
        )
    }

    /// Probe returning a fixed reading a limited number of times
    struct ScriptedProbe {
        remaining: usize,
        sample: ResourceSample,
    }

    impl ResourceProbe for ScriptedProbe {
        fn sample(&mut self, _pid: u32) -> Option<ResourceSample> {
            if self.remaining == 0 {
                return None;
            }
            self.remaining -= 1;
            Some(self.sample)
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_not_found() {
        let monitor = ProcessMonitor::default();
        let path = PathBuf::from("/non/existent/student_binary");
        let result = monitor.run(&path, &[]).await;
        assert!(matches!(
            result,
            Err(MonitorError::NotFound { path: p }) if p == path
        ));
    }

    #[tokio::test]
    async fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let monitor = ProcessMonitor::default();
        let result = monitor.run(dir.path(), &[]).await;
        assert!(matches!(result, Err(MonitorError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_executable_file_is_spawn_failure() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("not_executable");
        std::fs::write(&path, "plain text").expect("Failed to write test file");

        let monitor = ProcessMonitor::default();
        let result = monitor.run(&path, &[]).await;
        assert!(matches!(result, Err(MonitorError::SpawnFailure { .. })));
    }

    #[tokio::test]
    async fn test_immediate_exit_success() {
        let monitor = fast_monitor(None);
        let result = monitor
            .run(workload(), &[])
            .await
            .expect("workload should run");

        assert_eq!(result.exit_code, 0);
        assert!(!result.timed_out);
        assert!(result.peak_memory_mb >= 0.0);
        assert!(result.avg_cpu_percent >= 0.0);
        assert!(result.elapsed_sec >= 0.0);
        assert!(result.stdout_lines.is_empty());
        assert!(result.stderr_lines.is_empty());
    }

    #[tokio::test]
    async fn test_output_is_captured_and_capped() {
        let monitor = fast_monitor(None);
        let result = monitor
            .run(
                workload(),
                &args(&["--stdout-lines", "50", "--stderr-lines", "25", "--blank-lines"]),
            )
            .await
            .expect("workload should run");

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout_lines.len(), 20);
        assert_eq!(result.stderr_lines.len(), 10);
        assert_eq!(result.stdout_lines[0], "stdout line 1");
        assert_eq!(result.stdout_lines[19], "stdout line 20");
        assert_eq!(result.stderr_lines[0], "stderr line 1");
        assert_eq!(result.stderr_lines[9], "stderr line 10");
    }

    #[tokio::test]
    async fn test_large_output_does_not_deadlock() {
        // Far more than a pipe buffer holds on either stream
        let monitor = fast_monitor(Some(20.0));
        let result = monitor
            .run(
                workload(),
                &args(&["--stdout-lines", "200000", "--stderr-lines", "200000"]),
            )
            .await
            .expect("workload should run");

        assert!(!result.timed_out);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout_lines.len(), 20);
        assert_eq!(result.stderr_lines.len(), 10);
    }

    #[tokio::test]
    async fn test_exit_code_is_reported() {
        let monitor = fast_monitor(None);
        let result = monitor
            .run(workload(), &args(&["--exit-code", "3"]))
            .await
            .expect("workload should run");
        assert_eq!(result.exit_code, 3);
        assert!(!result.timed_out);
    }

    #[tokio::test]
    async fn test_peak_memory_tracks_allocation() {
        let monitor = fast_monitor(None);
        let result = monitor
            .run(workload(), &args(&["--alloc-mb", "50", "--hold-ms", "1000"]))
            .await
            .expect("workload should run");

        assert_eq!(result.exit_code, 0);
        assert!(
            result.peak_memory_mb >= 40.0,
            "peak memory {:.1}MB should reflect the 50MB allocation",
            result.peak_memory_mb
        );
        assert!(result.elapsed_sec >= 0.9);
    }

    #[tokio::test]
    async fn test_busy_workload_saturates_one_core() {
        // Default 0.1s interval, single-threaded spin loop
        let monitor = ProcessMonitor::default();
        let result = monitor
            .run(workload(), &args(&["--busy", "--hold-ms", "1500"]))
            .await
            .expect("workload should run");
        assert!(
            (70.0..=130.0).contains(&result.avg_cpu_percent),
            "avg CPU {:.1}% should be close to one saturated core",
            result.avg_cpu_percent
        );
    }

    #[tokio::test]
    async fn test_idle_workload_reports_low_cpu() {
        let monitor = ProcessMonitor::default();
        let result = monitor
            .run(workload(), &args(&["--hold-ms", "800"]))
            .await
            .expect("workload should run");
        assert!(
            result.avg_cpu_percent < 50.0,
            "sleeping workload reported {:.1}% CPU",
            result.avg_cpu_percent
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_process() {
        let sleep = Path::new("/bin/sleep");
        if !sleep.is_file() {
            return;
        }
        let monitor = ProcessMonitor::new(
            Duration::from_millis(100),
            Some(Duration::from_secs_f64(0.05)),
        );
        let result = monitor
            .run(sleep, &args(&["10"]))
            .await
            .expect("sleep should run");

        assert!(result.timed_out);
        assert_eq!(result.exit_code, -9);
        assert!(
            result.elapsed_sec >= 0.05 && result.elapsed_sec < 0.5,
            "elapsed {:.3}s should be close to the 0.05s timeout",
            result.elapsed_sec
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_descendants_holding_pipes() {
        let shell = Path::new("/bin/sh");
        if !shell.is_file() {
            return;
        }
        let monitor = ProcessMonitor::new(
            Duration::from_millis(50),
            Some(Duration::from_secs_f64(0.3)),
        );
        let wall = std::time::Instant::now();
        let result = monitor
            .run(shell, &args(&["-c", "sleep 5; echo done"]))
            .await
            .expect("shell should run");

        assert!(result.timed_out);
        assert_eq!(result.exit_code, -9);
        assert!(result.stdout_lines.is_empty());
        assert!(
            wall.elapsed() < Duration::from_secs(3),
            "run returned after {:.2}s, the forked sleep kept the pipes open",
            wall.elapsed().as_secs_f64()
        );
    }

    #[tokio::test]
    async fn test_sampling_failure_is_absorbed() {
        let monitor = fast_monitor(None);
        let probe = ScriptedProbe {
            remaining: 2,
            sample: ResourceSample {
                rss_bytes: 8 * 1024 * 1024,
                cpu_percent: 25.0,
            },
        };
        let result = monitor
            .run_with_probe(workload(), &args(&["--hold-ms", "300"]), probe)
            .await
            .expect("workload should run");

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.peak_memory_mb, 8.0);
        assert_eq!(result.avg_cpu_percent, 25.0);
        assert!(result.elapsed_sec >= 0.25);
    }
}
