// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Command-line entry point: parse arguments, run the benchmark pipeline,
// persist the record and print the summary. Exits 1 on any pipeline error.
//
// Tree Location:
// - src/main.rs (student-bench binary entry point)
// - Depends on: student-bench, clap, tokio, log

use clap::Parser;
use log::info;
use student_bench::{
    BenchmarkRecord, BenchmarkRunner, Result,
    core::types::Args,
    report::{ResultsFile, print_summary},
    utils::logging::{init_logging, parse_level},
};

const LOG_TARGET: &str = "student_bench::main";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_config.as_deref(), parse_level(&args.log_level)) {
        eprintln!("❌ Error: could not initialize logging: {}", e);
        std::process::exit(1);
    }

    match run(&args).await {
        Ok(record) => print_summary(&record),
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<BenchmarkRecord> {
    let runner = BenchmarkRunner::new(args.to_config())?;
    info!(target: LOG_TARGET, "🧪 Starting benchmark of {:?}", args.binary);

    let record = runner.run_full_benchmark().await?;
    ResultsFile::new(&args.output).save(&record).await?;
    Ok(record)
}
