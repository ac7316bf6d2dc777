//! Generation orchestration
//!
//! `WordService` composes the permutation generator with the batch dictionary
//! validator: cache check, generation, validation, merge, statistics, and the
//! response envelope. Its central contract is "always return a shape, annotate
//! degradation": only invalid input fails a call; resource ceilings and
//! dictionary trouble are absorbed into the returned result.

mod request;
mod result;

pub use request::{
    Filters, GenerationRequest, RequestError, SortBy, SortOrder, ValidatedRequest,
};
pub use result::{
    CacheInfo, CacheSource, ErrorInfo, ErrorSeverity, GenerationResponse, GenerationResult,
    PerformanceMetrics, Statistics,
};

use crate::cache::TtlCache;
use crate::core::Candidate;
use crate::generator::{self, GeneratorLimits};
use crate::validation::{BatchValidator, ValidationResult};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// TTL for cached generation results
pub const RESULT_TTL: Duration = Duration::from_secs(3600);

/// The generation orchestrator
///
/// The validator (with its provider, cache and breaker) and the result cache
/// are injected at construction; their lifecycle belongs to the process entry
/// point, and sharing them across services preserves the one-breaker-per-
/// provider invariant.
pub struct WordService {
    validator: BatchValidator,
    result_cache: Arc<dyn TtlCache<GenerationResult>>,
    limits: GeneratorLimits,
    result_ttl: Duration,
}

impl WordService {
    /// Create a service with default generation limits
    #[must_use]
    pub fn new(
        validator: BatchValidator,
        result_cache: Arc<dyn TtlCache<GenerationResult>>,
    ) -> Self {
        Self {
            validator,
            result_cache,
            limits: GeneratorLimits::default(),
            result_ttl: RESULT_TTL,
        }
    }

    /// Override the generation resource ceilings
    #[must_use]
    pub fn with_limits(mut self, limits: GeneratorLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The validator backing this service, for direct word lookups
    #[must_use]
    pub fn validator(&self) -> &BatchValidator {
        &self.validator
    }

    /// Generate, validate and assemble combinations for a request
    ///
    /// Only invalid input produces an `Err`. Ceiling breaches surface as
    /// `truncated` on the result; dictionary failures mark the affected words
    /// invalid and fill the response's `error` side-channel.
    ///
    /// # Errors
    /// Returns `RequestError` when the request fails validation.
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, RequestError> {
        let validated = request.validate()?;
        let key = validated.cache_key();

        // Cache errors fail open: treat as a miss and generate
        match self.result_cache.get(&key) {
            Ok(Some(entry)) => {
                debug!(key, age = ?entry.age, "generation cache hit");
                return Ok(GenerationResponse {
                    success: true,
                    data: entry.value,
                    cache_info: CacheInfo {
                        hit: true,
                        source: CacheSource::Cache,
                        age: entry.age.as_secs(),
                        ttl: entry.ttl.as_secs(),
                    },
                    error: None,
                });
            }
            Ok(None) => {}
            Err(error) => warn!(%error, key, "result cache unavailable, generating"),
        }

        let started = Instant::now();

        let generated = generator::generate(
            &validated.letters,
            validated.min_length,
            validated.max_length,
            validated.complexity,
            &self.limits,
        );

        let words: Vec<String> = generated
            .combinations
            .iter()
            .map(|c| c.word.clone())
            .collect();
        let report = self.validator.validate(&words, validated.language);

        let mut combinations = merge(generated.combinations, &report.results);
        sort_combinations(&mut combinations, validated.sort_by, validated.sort_order);

        let statistics = Statistics::from_candidates(&combinations);
        let performance_metrics = PerformanceMetrics::measure(
            started.elapsed(),
            generated.memory_bytes,
            generated.total_generated,
            words.len(),
        );

        let data = GenerationResult {
            combinations,
            total_generated: generated.total_generated,
            truncated: generated.truncated,
            statistics,
            performance_metrics,
        };

        if let Err(error) = self
            .result_cache
            .set(&key, data.clone(), self.result_ttl)
        {
            warn!(%error, key, "failed to cache generation result");
        }

        let error = report
            .degraded()
            .then(|| ErrorInfo::dictionary_unavailable(report.failed_batches, report.total_batches));

        Ok(GenerationResponse {
            success: true,
            data,
            cache_info: CacheInfo {
                hit: false,
                source: CacheSource::Generated,
                age: 0,
                ttl: self.result_ttl.as_secs(),
            },
            error,
        })
    }
}

/// Enrich candidates with their validation results, matching by word
///
/// Generated words are already normalized, so the match is exact; a word the
/// validator somehow missed stays invalid.
fn merge(candidates: Vec<Candidate>, results: &[ValidationResult]) -> Vec<Candidate> {
    let by_word: FxHashMap<&str, &ValidationResult> = results
        .iter()
        .map(|result| (result.word.as_str(), result))
        .collect();

    candidates
        .into_iter()
        .map(|mut candidate| {
            if let Some(result) = by_word.get(candidate.word.as_str()) {
                candidate.is_valid = result.is_valid;
                candidate.definition = result.definition.clone();
            }
            candidate
        })
        .collect()
}

/// Apply the requested ordering, if any; generation order otherwise
fn sort_combinations(combinations: &mut [Candidate], sort_by: Option<SortBy>, order: SortOrder) {
    let Some(sort_by) = sort_by else {
        return;
    };

    match sort_by {
        SortBy::Word => combinations.sort_by(|a, b| a.word.cmp(&b.word)),
        SortBy::Length => combinations.sort_by_key(|c| c.length),
        SortBy::Complexity => combinations.sort_by_key(|c| c.complexity),
    }

    if order == SortOrder::Desc {
        combinations.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheError, CachedEntry, InMemoryTtlCache};
    use crate::core::{Definition, Language};
    use crate::generator::TruncationReason;
    use crate::validation::{
        CircuitBreaker, DictionaryError, DictionaryProvider, LookupOutcome,
    };

    struct FixedProvider {
        valid: Vec<&'static str>,
    }

    impl DictionaryProvider for FixedProvider {
        fn lookup(&self, word: &str, _language: Language) -> Result<LookupOutcome, DictionaryError> {
            if self.valid.contains(&word) {
                Ok(LookupOutcome {
                    is_valid: true,
                    definition: Some(Definition::new(format!("meaning of {word}"))),
                })
            } else {
                Ok(LookupOutcome::invalid())
            }
        }
    }

    struct DownProvider;

    impl DictionaryProvider for DownProvider {
        fn lookup(&self, _word: &str, _language: Language) -> Result<LookupOutcome, DictionaryError> {
            Err(DictionaryError("connection refused".to_string()))
        }
    }

    /// Cache backend that is always unreachable
    struct DownCache;

    impl<V: Clone + Send> TtlCache<V> for DownCache {
        fn get(&self, _key: &str) -> Result<Option<CachedEntry<V>>, CacheError> {
            Err(CacheError("connection refused".to_string()))
        }

        fn multi_get(&self, _keys: &[String]) -> Result<Vec<Option<V>>, CacheError> {
            Err(CacheError("connection refused".to_string()))
        }

        fn set(&self, _key: &str, _value: V, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError("connection refused".to_string()))
        }
    }

    fn service_with(provider: Arc<dyn DictionaryProvider>) -> WordService {
        let validator = BatchValidator::new(
            provider,
            Arc::new(InMemoryTtlCache::new()),
            Arc::new(CircuitBreaker::default()),
        );
        WordService::new(validator, Arc::new(InMemoryTtlCache::new()))
    }

    fn cat_request() -> GenerationRequest {
        let mut request = GenerationRequest::new("cat");
        request.max_length = 3;
        request
    }

    #[test]
    fn end_to_end_cat_example() {
        let service = service_with(Arc::new(FixedProvider {
            valid: vec!["cat", "act", "tac"],
        }));

        let response = service.generate(&cat_request()).unwrap();
        assert!(response.success);
        assert!(response.error.is_none());
        assert!(!response.cache_info.hit);

        let data = &response.data;
        assert_eq!(data.total_generated, 12);
        assert_eq!(data.combinations.len(), 12);
        assert!(!data.truncated.status);

        let valid: Vec<&str> = data
            .combinations
            .iter()
            .filter(|c| c.is_valid)
            .map(|c| c.word.as_str())
            .collect();
        assert_eq!(valid.len(), 3);
        for word in ["cat", "act", "tac"] {
            assert!(valid.contains(&word));
        }

        assert_eq!(data.statistics.valid_words, 3);
        assert_eq!(data.statistics.invalid_words, 9);

        // Valid words carry definitions, invalid ones do not
        for candidate in &data.combinations {
            assert_eq!(candidate.is_valid, candidate.definition.is_some());
        }
    }

    #[test]
    fn second_identical_call_is_a_cache_hit_with_identical_data() {
        let service = service_with(Arc::new(FixedProvider {
            valid: vec!["cat"],
        }));

        let first = service.generate(&cat_request()).unwrap();
        let second = service.generate(&cat_request()).unwrap();

        assert!(!first.cache_info.hit);
        assert!(second.cache_info.hit);
        assert_eq!(second.cache_info.source, CacheSource::Cache);
        assert_eq!(first.data, second.data);
    }

    #[test]
    fn result_cache_failure_still_generates() {
        let validator = BatchValidator::new(
            Arc::new(FixedProvider { valid: vec!["cat"] }),
            Arc::new(InMemoryTtlCache::new()),
            Arc::new(CircuitBreaker::default()),
        );
        let service = WordService::new(validator, Arc::new(DownCache));

        let first = service.generate(&cat_request()).unwrap();
        assert!(first.success);
        assert!(!first.cache_info.hit);
        assert!(first.error.is_none());

        // Nothing was cached, so the second call regenerates the same data
        let second = service.generate(&cat_request()).unwrap();
        assert!(!second.cache_info.hit);
        assert_eq!(first.data.combinations, second.data.combinations);
    }

    #[test]
    fn total_provider_failure_degrades_not_fails() {
        let service = service_with(Arc::new(DownProvider));

        let response = service.generate(&cat_request()).unwrap();
        assert!(response.success);

        let error = response.error.expect("degradation should be surfaced");
        assert_eq!(error.code, "DICTIONARY_UNAVAILABLE");
        assert_eq!(error.severity, ErrorSeverity::Degraded);

        for candidate in &response.data.combinations {
            assert!(!candidate.is_valid);
        }
    }

    #[test]
    fn invalid_input_fails_fast() {
        let service = service_with(Arc::new(DownProvider));

        assert!(service.generate(&GenerationRequest::new("a")).is_err());
        assert!(service.generate(&GenerationRequest::new("c4t")).is_err());
    }

    #[test]
    fn truncation_is_reported_not_raised() {
        let service = service_with(Arc::new(FixedProvider { valid: vec![] })).with_limits(
            GeneratorLimits {
                max_combinations: 10,
                ..GeneratorLimits::default()
            },
        );

        let mut request = GenerationRequest::new("abcdef");
        request.max_length = 6;
        let response = service.generate(&request).unwrap();

        assert!(response.success);
        assert!(response.data.truncated.status);
        assert_eq!(
            response.data.truncated.reason,
            Some(TruncationReason::CombinationLimit)
        );
        assert_eq!(response.data.total_generated, 10);
    }

    #[test]
    fn french_normalization_folds_the_input() {
        let service = service_with(Arc::new(FixedProvider {
            valid: vec!["cafe"],
        }));

        let mut request = GenerationRequest::new("café");
        request.language = Language::French;
        request.min_length = 4;
        request.max_length = 4;

        let response = service.generate(&request).unwrap();
        let cafe = response
            .data
            .combinations
            .iter()
            .find(|c| c.word == "cafe")
            .expect("folded arrangement present");
        assert!(cafe.is_valid);

        // No candidate keeps the accented form
        assert!(response.data.combinations.iter().all(|c| !c.word.contains('é')));
    }

    #[test]
    fn generation_is_deterministic_across_services() {
        let make_response = || {
            let service = service_with(Arc::new(FixedProvider {
                valid: vec!["cat", "act"],
            }));
            service.generate(&cat_request()).unwrap()
        };

        let first = make_response();
        let second = make_response();

        assert_eq!(first.data.combinations, second.data.combinations);
    }

    #[test]
    fn sort_by_complexity_descending() {
        let service = service_with(Arc::new(FixedProvider { valid: vec![] }));

        let mut request = cat_request();
        request.filters = Some(Filters {
            sort_by: Some(SortBy::Complexity),
            sort_order: Some(SortOrder::Desc),
            ..Filters::default()
        });

        let response = service.generate(&request).unwrap();
        let scores: Vec<u8> = response
            .data
            .combinations
            .iter()
            .map(|c| c.complexity)
            .collect();

        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn complexity_filter_trims_combinations_but_not_total() {
        let service = service_with(Arc::new(FixedProvider { valid: vec![] }));

        let mut request = cat_request();
        request.filters = Some(Filters {
            min_complexity: Some(7),
            ..Filters::default()
        });

        let response = service.generate(&request).unwrap();
        assert_eq!(response.data.total_generated, 12);
        assert!(response.data.combinations.len() < 12);
        for candidate in &response.data.combinations {
            assert!(candidate.complexity >= 7);
        }
    }
}
