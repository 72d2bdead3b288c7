// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/hardware_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains tests for the hardware micro-benchmarks and the host
// profiler. Sizes are kept small so the suite stays fast.
//
// Tree Location:
// - tests/hardware_test.rs (hardware baseline tests)
// - Depends on: student-bench

#[cfg(test)]
mod tests {
    use student_bench::benchmark::hardware::{HardwareBenchmark, bandwidth_gbps, gflops};
    use student_bench::benchmark::profiler::SystemProfiler;

    #[test]
    fn test_measure_compute_small_matrix() {
        let bench = HardwareBenchmark::new(64, 1);
        let (achieved, elapsed_ms) = bench.measure_compute(3);
        assert!(achieved >= 0.0 && achieved.is_finite());
        assert!(elapsed_ms >= 0.0);
    }

    #[test]
    fn test_measure_compute_single_element() {
        let bench = HardwareBenchmark::new(1, 0);
        let (achieved, elapsed_ms) = bench.measure_compute(1);
        assert!(achieved >= 0.0 && achieved.is_finite());
        assert!(elapsed_ms >= 0.0);
    }

    #[test]
    fn test_measure_memory_zero_mb_is_finite() {
        let bench = HardwareBenchmark::new(8, 0);
        let (gbps, elapsed_ms) = bench.measure_memory_bandwidth(5);
        assert!(gbps.is_finite());
        assert_eq!(gbps, 0.0);
        assert!(elapsed_ms >= 0.0);
    }

    #[test]
    fn test_measure_memory_small_buffer() {
        let bench = HardwareBenchmark::new(8, 4);
        let (gbps, elapsed_ms) = bench.measure_memory_bandwidth(5);
        assert!(gbps >= 0.0 && gbps.is_finite());
        assert!(elapsed_ms >= 0.0);
    }

    #[test]
    fn test_run_benchmark_sums_elapsed_times() {
        let bench = HardwareBenchmark::new(32, 2);
        let metrics = bench.run_benchmark();
        assert!(metrics.gflops >= 0.0);
        assert!(metrics.memory_bandwidth_gbps >= 0.0);
        assert!(metrics.benchmark_time_ms >= 0.0);
    }

    #[test]
    fn test_fixed_elapsed_flops_are_proportional() {
        for n in [1usize, 16, 512] {
            let three = gflops(n, 3, 0.25);
            let six = gflops(n, 6, 0.25);
            assert!((six - 2.0 * three).abs() <= 1e-9 * six.max(1.0));
        }
        assert_eq!(bandwidth_gbps(0, 0.0), 0.0);
    }

    #[test]
    fn test_default_sizes() {
        let bench = HardwareBenchmark::default();
        assert_eq!(bench.matrix_size(), 512);
        assert_eq!(bench.memory_mb(), 200);
    }

    #[test]
    fn test_system_info_invariants() {
        let info = SystemProfiler::get_system_info();
        assert!(info.cpu_count_physical >= 1);
        assert!(info.cpu_count_logical >= 1);
        assert!(info.cpu_freq_mhz >= 0.0);
        assert!(info.total_memory_gb >= 0.0);
        assert!(info.platform.contains(std::env::consts::ARCH));
        assert!(info.runtime_version.starts_with("student-bench"));
    }
}
