// Synthetic Workload - controllable target binary for student-bench
// File: src/bin/synthetic_workload.rs
//
// Allocates and touches a buffer, holds it (sleeping or spinning), prints
// numbered lines to stdout/stderr and exits with the requested code. Used by
// the monitor tests and handy for trying the benchmark end to end.

use anyhow::{Result, bail};
use clap::Parser;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "synthetic_workload", about = "Controllable benchmark target")]
struct Args {
    /// Megabytes to allocate and keep resident
    #[arg(long, default_value = "0")]
    alloc_mb: usize,

    /// Milliseconds to hold the allocation before exiting
    #[arg(long, default_value = "0")]
    hold_ms: u64,

    /// Spin the CPU while holding instead of sleeping
    #[arg(long, default_value = "false")]
    busy: bool,

    /// Number of lines written to stdout
    #[arg(long, default_value = "0")]
    stdout_lines: usize,

    /// Number of lines written to stderr
    #[arg(long, default_value = "0")]
    stderr_lines: usize,

    /// Insert a blank line after every output line
    #[arg(long, default_value = "false")]
    blank_lines: bool,

    /// Process exit code
    #[arg(long, default_value = "0")]
    exit_code: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !(0..=255).contains(&args.exit_code) {
        bail!("exit code must be within 0..=255, got {}", args.exit_code);
    }

    // Touch every page so the allocation is resident, not just reserved
    let mut buffer = vec![0u8; args.alloc_mb * 1024 * 1024];
    for (i, byte) in buffer.iter_mut().enumerate().step_by(4096) {
        *byte = (i % 251) as u8;
    }

    {
        let mut stdout = std::io::stdout().lock();
        for i in 1..=args.stdout_lines {
            writeln!(stdout, "stdout line {}", i)?;
            if args.blank_lines {
                writeln!(stdout)?;
            }
        }
        stdout.flush()?;
    }
    {
        let mut stderr = std::io::stderr().lock();
        for i in 1..=args.stderr_lines {
            writeln!(stderr, "stderr line {}", i)?;
            if args.blank_lines {
                writeln!(stderr)?;
            }
        }
    }

    let hold = Duration::from_millis(args.hold_ms);
    if args.busy {
        let start = Instant::now();
        let mut acc = 0u64;
        while start.elapsed() < hold {
            acc = acc.wrapping_mul(6364136223846793005).wrapping_add(1);
            black_box(acc);
        }
    } else {
        std::thread::sleep(hold);
    }

    black_box(&buffer);
    std::process::exit(args.exit_code);
}
