// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/hardware.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the hardware micro-benchmarks that characterize the
// host: a dense single-precision matrix multiplication for compute throughput
// (GFLOPS) and a large buffer copy for memory bandwidth (GB/s).
//
// Tree Location:
// - src/benchmark/hardware.rs (hardware baseline measurement)
// - Depends on: rand, rand_chacha, rayon

use crate::core::config::{DEFAULT_MATRIX_SIZE, DEFAULT_MEMORY_MB};
use crate::core::types::BenchmarkMetrics;
use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::hint::black_box;
use std::time::Instant;

const LOG_TARGET: &str = "student_bench::hardware";

/// Fixed seed so the compute matrices are identical across runs of one build
pub const MATRIX_SEED: u64 = 42;

pub const DEFAULT_COMPUTE_ITERATIONS: u32 = 3;
pub const DEFAULT_MEMORY_ITERATIONS: u32 = 5;

const BYTES_PER_MB: usize = 1024 * 1024;
const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// GFLOPS for `iterations` N x N multiplications completed in `elapsed_secs`.
/// Returns 0.0 when the timer did not advance.
pub fn gflops(matrix_size: usize, iterations: u32, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    let n = matrix_size as f64;
    let total_flops = 2.0 * n * n * n * iterations as f64;
    (total_flops / elapsed_secs) * 1e-9
}

/// GiB/s for `total_bytes` copied in `elapsed_secs`. Returns 0.0 when the
/// timer did not advance.
pub fn bandwidth_gbps(total_bytes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    (total_bytes as f64 / BYTES_PER_GIB) / elapsed_secs
}

/// Row-major square matrix of f32
#[derive(Debug, Clone)]
pub struct Matrix {
    size: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Uniform values in [0, 1) drawn from `rng`
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let data = (0..size * size).map(|_| rng.gen_range(0.0f32..1.0)).collect();
        Self { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.size + col]
    }

    /// `self * other`, parallel over output rows
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        let n = self.size;
        let mut out = vec![0.0f32; n * n];
        if n > 0 {
            out.par_chunks_mut(n).enumerate().for_each(|(i, out_row)| {
                let a_row = &self.data[i * n..(i + 1) * n];
                // i-k-j order keeps the inner loop streaming over contiguous rows
                for (k, &a_ik) in a_row.iter().enumerate() {
                    let b_row = &other.data[k * n..(k + 1) * n];
                    for (o, &b_kj) in out_row.iter_mut().zip(b_row) {
                        *o += a_ik * b_kj;
                    }
                }
            });
        }
        Matrix { size: n, data: out }
    }
}

/// Compute and memory micro-benchmarks
#[derive(Debug, Clone)]
pub struct HardwareBenchmark {
    matrix_size: usize,
    memory_mb: usize,
}

impl HardwareBenchmark {
    pub fn new(matrix_size: usize, memory_mb: usize) -> Self {
        Self {
            matrix_size,
            memory_mb,
        }
    }

    pub fn matrix_size(&self) -> usize {
        self.matrix_size
    }

    pub fn memory_mb(&self) -> usize {
        self.memory_mb
    }

    /// Time `iterations` matrix products after one untimed warmup.
    /// Returns (GFLOPS, elapsed milliseconds).
    pub fn measure_compute(&self, iterations: u32) -> (f64, f64) {
        let mut rng = ChaCha8Rng::seed_from_u64(MATRIX_SEED);
        let matrix_a = Matrix::random(self.matrix_size, &mut rng);
        let matrix_b = Matrix::random(self.matrix_size, &mut rng);

        // Warmup
        black_box(matrix_a.multiply(&matrix_b));

        let start = Instant::now();
        for _ in 0..iterations {
            let result = matrix_a.multiply(&matrix_b);
            black_box(&result);
        }
        let elapsed = start.elapsed().as_secs_f64();

        let achieved = gflops(self.matrix_size, iterations, elapsed);
        debug!(target: LOG_TARGET,
            "Compute: {}x{} x{} in {:.3}ms -> {:.2} GFLOPS",
            self.matrix_size, self.matrix_size, iterations, elapsed * 1000.0, achieved
        );
        (achieved, elapsed * 1000.0)
    }

    /// Time `iterations` full copies of a random buffer.
    /// Returns (GB/s, elapsed milliseconds).
    pub fn measure_memory_bandwidth(&self, iterations: u32) -> (f64, f64) {
        let size_bytes = self.memory_mb * BYTES_PER_MB;
        let mut source = vec![0u8; size_bytes];
        ChaCha8Rng::seed_from_u64(MATRIX_SEED).fill_bytes(&mut source);
        let mut dest = vec![0u8; size_bytes];

        let start = Instant::now();
        let mut total_bytes = 0u64;
        for _ in 0..iterations {
            dest.copy_from_slice(black_box(&source));
            black_box(&mut dest);
            total_bytes += size_bytes as u64;
        }
        let elapsed = start.elapsed().as_secs_f64();

        let achieved = bandwidth_gbps(total_bytes, elapsed);
        debug!(target: LOG_TARGET,
            "Memory: {} MB x{} in {:.3}ms -> {:.2} GB/s",
            self.memory_mb, iterations, elapsed * 1000.0, achieved
        );
        (achieved, elapsed * 1000.0)
    }

    /// Run both measurements back to back, never concurrently
    pub fn run_benchmark(&self) -> BenchmarkMetrics {
        let (gflops, compute_ms) = self.measure_compute(DEFAULT_COMPUTE_ITERATIONS);
        let (bandwidth, memory_ms) = self.measure_memory_bandwidth(DEFAULT_MEMORY_ITERATIONS);

        info!(target: LOG_TARGET,
            "⚡ Hardware baseline: {:.2} GFLOPS | {:.2} GB/s",
            gflops, bandwidth
        );

        BenchmarkMetrics {
            gflops,
            memory_bandwidth_gbps: bandwidth,
            benchmark_time_ms: compute_ms + memory_ms,
        }
    }
}

impl Default for HardwareBenchmark {
    fn default() -> Self {
        Self::new(DEFAULT_MATRIX_SIZE, DEFAULT_MEMORY_MB)
    }
}
