//! Benchmark command
//!
//! Runs randomly sampled letter pools through the full service and reports
//! throughput.

use crate::core::Language;
use crate::service::{GenerationRequest, WordService};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Letters sampled for benchmark pools, weighted roughly by English frequency
const SAMPLE_LETTERS: &[char] = &[
    'e', 'e', 'e', 'a', 'a', 'a', 'r', 'r', 'i', 'i', 'o', 'o', 't', 't', 'n', 'n', 's', 's', 'l',
    'c', 'u', 'd', 'p', 'm', 'h', 'g', 'b', 'f', 'y', 'w', 'k', 'v',
];

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_runs: usize,
    pub total_combinations: usize,
    pub total_valid: usize,
    pub truncated_runs: usize,
    pub duration: Duration,
    pub runs_per_second: f64,
    pub combinations_per_second: f64,
}

/// Generate `count` random letter pools of `pool_size` letters each
///
/// Pools repeat letters the way real racks do, so duplicate-handling paths get
/// exercised too.
#[must_use]
pub fn run_benchmark(
    service: &WordService,
    count: usize,
    pool_size: usize,
    language: Language,
) -> BenchmarkResult {
    let progress = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} pools") {
        progress.set_style(style);
    }

    let mut rng = rand::rng();
    let start = Instant::now();

    let mut total_combinations = 0;
    let mut total_valid = 0;
    let mut truncated_runs = 0;

    for _ in 0..count {
        let letters: String = (0..pool_size)
            .filter_map(|_| SAMPLE_LETTERS.choose(&mut rng))
            .collect();

        let mut request = GenerationRequest::new(letters);
        request.language = language;
        request.max_length = pool_size;

        if let Ok(response) = service.generate(&request) {
            total_combinations += response.data.combinations.len();
            total_valid += response.data.statistics.valid_words;
            if response.data.truncated.status {
                truncated_runs += 1;
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    let duration = start.elapsed();
    let seconds = duration.as_secs_f64().max(1e-6);

    BenchmarkResult {
        total_runs: count,
        total_combinations,
        total_valid,
        truncated_runs,
        duration,
        runs_per_second: count as f64 / seconds,
        combinations_per_second: total_combinations as f64 / seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryTtlCache;
    use crate::dictionary::StaticDictionary;
    use crate::validation::{BatchValidator, CircuitBreaker};
    use std::sync::Arc;

    fn starter_service() -> WordService {
        let validator = BatchValidator::new(
            Arc::new(StaticDictionary::starter()),
            Arc::new(InMemoryTtlCache::new()),
            Arc::new(CircuitBreaker::default()),
        );
        WordService::new(validator, Arc::new(InMemoryTtlCache::new()))
    }

    #[test]
    fn benchmark_runs() {
        let service = starter_service();
        let result = run_benchmark(&service, 5, 4, Language::English);

        assert_eq!(result.total_runs, 5);
        assert!(result.total_combinations > 0);
        assert!(result.runs_per_second > 0.0);
    }

    #[test]
    fn benchmark_zero_runs() {
        let service = starter_service();
        let result = run_benchmark(&service, 0, 4, Language::English);

        assert_eq!(result.total_runs, 0);
        assert_eq!(result.total_combinations, 0);
    }
}
