//! Validate command
//!
//! Checks explicit words against the dictionary, bypassing generation.

use crate::core::Language;
use crate::validation::{BatchValidator, ValidationResult};

/// Outcome of a direct validation run
#[derive(Debug, Clone)]
pub struct ValidateSummary {
    pub results: Vec<ValidationResult>,
    pub valid_count: usize,
    pub invalid_count: usize,
    /// True when at least one dictionary batch failed
    pub degraded: bool,
}

/// Validate the given words and tally the outcome
#[must_use]
pub fn run_validate(
    validator: &BatchValidator,
    words: &[String],
    language: Language,
) -> ValidateSummary {
    let report = validator.validate(words, language);

    let valid_count = report.results.iter().filter(|r| r.is_valid).count();
    let invalid_count = report.results.len() - valid_count;
    let degraded = report.degraded();

    ValidateSummary {
        results: report.results,
        valid_count,
        invalid_count,
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryTtlCache;
    use crate::dictionary::StaticDictionary;
    use crate::validation::{CircuitBreaker, DictionaryError, DictionaryProvider, LookupOutcome};
    use std::sync::Arc;

    struct DownProvider;

    impl DictionaryProvider for DownProvider {
        fn lookup(
            &self,
            _word: &str,
            _language: Language,
        ) -> Result<LookupOutcome, DictionaryError> {
            Err(DictionaryError("connection refused".to_string()))
        }
    }

    fn starter_validator() -> BatchValidator {
        BatchValidator::new(
            Arc::new(StaticDictionary::starter()),
            Arc::new(InMemoryTtlCache::new()),
            Arc::new(CircuitBreaker::default()),
        )
    }

    #[test]
    fn tallies_valid_and_invalid() {
        let validator = starter_validator();
        let words = vec![
            "cat".to_string(),
            "act".to_string(),
            "zzz".to_string(),
        ];

        let summary = run_validate(&validator, &words, Language::English);
        assert_eq!(summary.valid_count, 2);
        assert_eq!(summary.invalid_count, 1);
        assert!(!summary.degraded);
    }

    #[test]
    fn provider_failure_marks_summary_degraded() {
        let validator = BatchValidator::new(
            Arc::new(DownProvider),
            Arc::new(InMemoryTtlCache::new()),
            Arc::new(CircuitBreaker::default()),
        );

        let words = vec!["cat".to_string(), "act".to_string()];
        let summary = run_validate(&validator, &words, Language::English);

        assert!(summary.degraded);
        assert_eq!(summary.valid_count, 0);
        assert_eq!(summary.invalid_count, 2);
        assert_eq!(summary.results.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let validator = starter_validator();
        let summary = run_validate(&validator, &[], Language::English);

        assert!(summary.results.is_empty());
        assert_eq!(summary.valid_count, 0);
        assert_eq!(summary.invalid_count, 0);
    }
}
