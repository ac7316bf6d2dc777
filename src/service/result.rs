//! Generation results and the response envelope

use crate::core::Candidate;
use crate::generator::Truncation;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate statistics over the merged combinations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub average_length: f64,
    pub average_complexity: f64,
    pub valid_words: usize,
    pub invalid_words: usize,
}

impl Statistics {
    /// Compute statistics from a merged candidate set
    #[must_use]
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        if candidates.is_empty() {
            return Self {
                average_length: 0.0,
                average_complexity: 0.0,
                valid_words: 0,
                invalid_words: 0,
            };
        }

        let count = candidates.len() as f64;
        let total_length: usize = candidates.iter().map(|c| c.length).sum();
        let total_complexity: u32 = candidates.iter().map(|c| u32::from(c.complexity)).sum();
        let valid_words = candidates.iter().filter(|c| c.is_valid).count();

        Self {
            average_length: total_length as f64 / count,
            average_complexity: f64::from(total_complexity) / count,
            valid_words,
            invalid_words: candidates.len() - valid_words,
        }
    }
}

/// Timing and throughput for one generation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// End-to-end wall-clock time in milliseconds
    pub duration_ms: u64,
    /// Estimated memory retained by the result, in megabytes
    pub memory_estimate_mb: f64,
    pub combinations_per_second: f64,
    pub validations_per_second: f64,
}

impl PerformanceMetrics {
    /// Derive metrics from a call's duration and work counts
    #[must_use]
    pub fn measure(
        duration: Duration,
        memory_bytes: usize,
        combinations: usize,
        validations: usize,
    ) -> Self {
        // Guard the rate computations against a sub-microsecond clock reading
        let seconds = duration.as_secs_f64().max(1e-6);

        Self {
            duration_ms: duration.as_millis() as u64,
            memory_estimate_mb: memory_bytes as f64 / (1024.0 * 1024.0),
            combinations_per_second: combinations as f64 / seconds,
            validations_per_second: validations as f64 / seconds,
        }
    }
}

/// The complete output of one generation call
///
/// Immutable once constructed; cached and returned as-is on later hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Candidates in deterministic generation order (or the requested sort)
    pub combinations: Vec<Candidate>,
    /// Length-valid unique arrangements counted before complexity filtering
    pub total_generated: usize,
    pub truncated: Truncation,
    pub statistics: Statistics,
    pub performance_metrics: PerformanceMetrics,
}

/// Where a response's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheSource {
    Cache,
    Generated,
}

/// Cache metadata attached to every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    pub hit: bool,
    pub source: CacheSource,
    /// Age of the served entry in seconds (0 for fresh results)
    pub age: u64,
    /// TTL the entry was (or will be) stored with, in seconds
    pub ttl: u64,
}

/// Degradation severity carried in the error side-channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Degraded,
    Critical,
}

/// Non-fatal error detail attached to a successful response
///
/// Dictionary trouble degrades results instead of failing the call; this is
/// where that degradation is surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    pub severity: ErrorSeverity,
    pub recovery_action: String,
}

impl ErrorInfo {
    /// The dictionary provider failed for some or all batches
    #[must_use]
    pub fn dictionary_unavailable(failed_batches: usize, total_batches: usize) -> Self {
        Self {
            code: "DICTIONARY_UNAVAILABLE".to_string(),
            message: format!(
                "Dictionary lookups failed for {failed_batches} of {total_batches} batches; \
                 affected words are marked invalid"
            ),
            severity: ErrorSeverity::Degraded,
            recovery_action: "retry".to_string(),
        }
    }
}

/// The full response envelope returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub success: bool,
    pub data: GenerationResult,
    pub cache_info: CacheInfo,
    /// Null unless the call degraded; never set for cache hits
    pub error: Option<ErrorInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(word: &str, complexity: u8, is_valid: bool) -> Candidate {
        let mut c = Candidate::new(word.to_string(), complexity);
        c.is_valid = is_valid;
        c
    }

    #[test]
    fn statistics_from_empty_set() {
        let stats = Statistics::from_candidates(&[]);
        assert_eq!(stats.valid_words, 0);
        assert_eq!(stats.invalid_words, 0);
        assert!(stats.average_length.abs() < f64::EPSILON);
    }

    #[test]
    fn statistics_averages_and_counts() {
        let candidates = vec![
            candidate("at", 3, true),
            candidate("cat", 7, true),
            candidate("tca", 7, false),
        ];

        let stats = Statistics::from_candidates(&candidates);
        assert_eq!(stats.valid_words, 2);
        assert_eq!(stats.invalid_words, 1);
        assert!((stats.average_length - 8.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_complexity - 17.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_guard_against_zero_duration() {
        let metrics = PerformanceMetrics::measure(Duration::ZERO, 0, 10, 10);
        assert!(metrics.combinations_per_second.is_finite());
        assert!(metrics.validations_per_second.is_finite());
    }

    #[test]
    fn metrics_convert_bytes_to_megabytes() {
        let metrics = PerformanceMetrics::measure(Duration::from_millis(100), 2 * 1024 * 1024, 0, 0);
        assert!((metrics.memory_estimate_mb - 2.0).abs() < 1e-9);
        assert_eq!(metrics.duration_ms, 100);
    }

    #[test]
    fn envelope_serializes_null_error() {
        let response = GenerationResponse {
            success: true,
            data: GenerationResult {
                combinations: vec![],
                total_generated: 0,
                truncated: Truncation::none(),
                statistics: Statistics::from_candidates(&[]),
                performance_metrics: PerformanceMetrics::measure(Duration::ZERO, 0, 0, 0),
            },
            cache_info: CacheInfo {
                hit: false,
                source: CacheSource::Generated,
                age: 0,
                ttl: 3600,
            },
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":null"));
        assert!(json.contains("\"cacheInfo\""));
        assert!(json.contains("\"totalGenerated\""));
    }
}
