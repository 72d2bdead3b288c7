// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/report/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the report module: JSON persistence of benchmark records
// and the human-readable terminal summary.
//
// Tree Location:
// - src/report/mod.rs (report module entry point)
// - Submodules: results_file, summary

pub mod results_file;
pub mod summary;

pub use results_file::{ResultsFile, ResultsFileError};
pub use summary::{print_summary, render_summary};
