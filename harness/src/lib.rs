//! Benchmark harness: golden dataset, run loop, and reporting.

pub mod golden;
pub mod report;
pub mod runner;

pub use golden::{builtin_golden_set, load_golden_file, GoldenError, GoldenItem};
pub use report::BenchReport;
pub use runner::{BenchError, BenchmarkRunner, EvaluationResult, Status};
