//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_generation_response, print_score_breakdown,
    print_validate_summary,
};
