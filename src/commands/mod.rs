//! Command implementations

pub mod benchmark;
pub mod find;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use find::{FindResult, find_words};
pub use simple::run_simple;
