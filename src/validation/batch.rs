//! Batched dictionary validation
//!
//! Normalizes, deduplicates and partitions candidate words, serves what it can
//! from the cache, sends the rest to the dictionary provider through the
//! shared circuit breaker, and re-expands results to the caller's order.
//! A failed batch degrades its words to invalid instead of failing the call.

use super::breaker::{BreakerError, CircuitBreaker};
use super::dictionary::{DictionaryProvider, LookupOutcome};
use crate::cache::TtlCache;
use crate::core::{Definition, Language};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Words per provider/cache round-trip
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// TTL for cached validation outcomes
pub const VALIDATION_TTL: Duration = Duration::from_secs(3600);

/// Where a validation outcome came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSource {
    Cache,
    Dictionary,
    Error,
}

/// Outcome of one word's validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The normalized word that was looked up
    pub word: String,
    pub is_valid: bool,
    pub definition: Option<Definition>,
    pub source: ValidationSource,
}

/// Everything a validation call produced
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// One result per input word, in input order
    pub results: Vec<ValidationResult>,
    /// Batches whose provider call failed (breaker open or backend error)
    pub failed_batches: usize,
    /// Total batches dispatched to cache/provider
    pub total_batches: usize,
}

impl ValidationReport {
    /// Whether every provider batch failed
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.total_batches > 0 && self.failed_batches == self.total_batches
    }

    /// Whether any provider batch failed
    #[must_use]
    pub fn degraded(&self) -> bool {
        self.failed_batches > 0
    }
}

/// Batch dictionary validator
///
/// Owns the batching policy; the provider, cache and breaker are shared
/// process-wide and injected at construction.
pub struct BatchValidator {
    provider: Arc<dyn DictionaryProvider>,
    cache: Arc<dyn TtlCache<LookupOutcome>>,
    breaker: Arc<CircuitBreaker>,
    batch_size: usize,
}

impl BatchValidator {
    /// Create a validator with the default batch size
    #[must_use]
    pub fn new(
        provider: Arc<dyn DictionaryProvider>,
        cache: Arc<dyn TtlCache<LookupOutcome>>,
        breaker: Arc<CircuitBreaker>,
    ) -> Self {
        Self {
            provider,
            cache,
            breaker,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the words-per-batch partition size
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Validate a list of words, preserving input order
    ///
    /// Each word is normalized before lookup; repeated words share one
    /// round-trip and each occurrence receives the same result. Batches run
    /// concurrently and are merged back by word identity, not completion
    /// order.
    #[must_use]
    pub fn validate(&self, words: &[String], language: Language) -> ValidationReport {
        if words.is_empty() {
            return ValidationReport {
                results: Vec::new(),
                failed_batches: 0,
                total_batches: 0,
            };
        }

        let normalized: Vec<String> = words.iter().map(|w| language.fold(w)).collect();

        let mut seen = FxHashSet::default();
        let unique: Vec<String> = normalized
            .iter()
            .filter(|word| seen.insert(word.as_str()))
            .cloned()
            .collect();

        let batches: Vec<&[String]> = unique.chunks(self.batch_size).collect();
        let total_batches = batches.len();

        let batch_outputs: Vec<(Vec<ValidationResult>, bool)> = batches
            .par_iter()
            .map(|batch| self.validate_batch(batch, language))
            .collect();

        let failed_batches = batch_outputs.iter().filter(|(_, failed)| *failed).count();

        let by_word: FxHashMap<&str, &ValidationResult> = batch_outputs
            .iter()
            .flat_map(|(results, _)| results.iter())
            .map(|result| (result.word.as_str(), result))
            .collect();

        // Re-expand deduplicated results to the original, possibly repeated,
        // input list
        let results = normalized
            .iter()
            .map(|word| {
                by_word.get(word.as_str()).map_or_else(
                    || ValidationResult {
                        word: word.clone(),
                        is_valid: false,
                        definition: None,
                        source: ValidationSource::Error,
                    },
                    |result| (*result).clone(),
                )
            })
            .collect();

        ValidationReport {
            results,
            failed_batches,
            total_batches,
        }
    }

    /// Validate one batch: cache first, provider through the breaker for misses
    ///
    /// Returns the results plus whether the provider call for this batch failed.
    fn validate_batch(&self, batch: &[String], language: Language) -> (Vec<ValidationResult>, bool) {
        let keys: Vec<String> = batch.iter().map(|w| cache_key(w, language)).collect();

        // Cache errors fail open: every word becomes a miss
        let cached: Vec<Option<LookupOutcome>> = match self.cache.multi_get(&keys) {
            Ok(values) => values,
            Err(error) => {
                warn!(%error, "validation cache unavailable, treating batch as miss");
                vec![None; batch.len()]
            }
        };

        let mut results: Vec<Option<ValidationResult>> = batch
            .iter()
            .zip(&cached)
            .map(|(word, hit)| {
                hit.as_ref().map(|outcome| ValidationResult {
                    word: word.clone(),
                    is_valid: outcome.is_valid,
                    definition: outcome.definition.clone(),
                    source: ValidationSource::Cache,
                })
            })
            .collect();

        let misses: Vec<String> = batch
            .iter()
            .zip(&cached)
            .filter(|(_, hit)| hit.is_none())
            .map(|(word, _)| word.clone())
            .collect();

        if misses.is_empty() {
            let filled = results.into_iter().flatten().collect();
            return (filled, false);
        }

        debug!(
            provider = self.provider.name(),
            batch = batch.len(),
            misses = misses.len(),
            "dispatching dictionary batch"
        );

        let provider_failed = match self
            .breaker
            .execute(|| self.provider.lookup_batch(&misses, language))
        {
            Ok(outcomes) => {
                for (word, outcome) in misses.iter().zip(&outcomes) {
                    if let Err(error) =
                        self.cache
                            .set(&cache_key(word, language), outcome.clone(), VALIDATION_TTL)
                    {
                        debug!(%error, word, "failed to cache validation outcome");
                    }
                }

                let by_miss: FxHashMap<&str, &LookupOutcome> = misses
                    .iter()
                    .map(String::as_str)
                    .zip(outcomes.iter())
                    .collect();

                for (slot, word) in results.iter_mut().zip(batch) {
                    if slot.is_none() {
                        let outcome = by_miss.get(word.as_str());
                        *slot = Some(ValidationResult {
                            word: word.clone(),
                            is_valid: outcome.is_some_and(|o| o.is_valid),
                            definition: outcome.and_then(|o| o.definition.clone()),
                            source: ValidationSource::Dictionary,
                        });
                    }
                }
                false
            }
            Err(BreakerError::Open) => {
                warn!(misses = misses.len(), "circuit breaker open, marking batch invalid");
                mark_missing_as_errors(&mut results, batch);
                true
            }
            Err(BreakerError::Operation(error)) => {
                warn!(%error, misses = misses.len(), "dictionary batch failed");
                mark_missing_as_errors(&mut results, batch);
                true
            }
        };

        let filled = results.into_iter().flatten().collect();
        (filled, provider_failed)
    }
}

fn mark_missing_as_errors(results: &mut [Option<ValidationResult>], batch: &[String]) {
    for (slot, word) in results.iter_mut().zip(batch) {
        if slot.is_none() {
            *slot = Some(ValidationResult {
                word: word.clone(),
                is_valid: false,
                definition: None,
                source: ValidationSource::Error,
            });
        }
    }
}

fn cache_key(word: &str, language: Language) -> String {
    format!("{}:{word}", language.code())
}
