// Student Bench - Free and Open Source Software Statement
//
// This project, student-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scoring/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Tree Location:
// - src/scoring/mod.rs (scoring module entry point)
// - Submodules: evaluator

pub mod evaluator;

pub use evaluator::PerformanceEvaluator;
