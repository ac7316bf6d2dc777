//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod validate;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateOptions, run_generate};
pub use validate::{ValidateSummary, run_validate};
