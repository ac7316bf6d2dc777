//! Generation requests and their validation
//!
//! Invalid input is the only condition that fails a generation call outright;
//! it is detected here before any work is performed.

use crate::core::{Language, LetterSet, LetterSetError, MAX_LETTERS, MIN_LETTERS};
use crate::generator::ComplexityRange;
use crate::scoring::{MAX_COMPLEXITY, MIN_COMPLEXITY};
use serde::{Deserialize, Serialize};

/// How to order combinations in the response, when requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Word,
    Length,
    Complexity,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Optional result filters and ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_complexity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_complexity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// A generation request as received from the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Source letters, 2-15 alphabetic characters
    pub characters: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
}

const fn default_min_length() -> usize {
    MIN_LETTERS
}

const fn default_max_length() -> usize {
    MAX_LETTERS
}

/// Error type for rejected requests
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Letters(#[from] LetterSetError),
    #[error(
        "Length bounds must satisfy {MIN_LETTERS} <= min <= max <= {MAX_LETTERS}, \
         got min={min} max={max}"
    )]
    InvalidLengthBounds { min: usize, max: usize },
    #[error(
        "Complexity bounds must satisfy {MIN_COMPLEXITY} <= min <= max <= {MAX_COMPLEXITY}, \
         got min={min} max={max}"
    )]
    InvalidComplexityBounds { min: u8, max: u8 },
}

/// A request that passed validation, ready for generation
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub letters: LetterSet,
    pub language: Language,
    pub min_length: usize,
    pub max_length: usize,
    pub complexity: Option<ComplexityRange>,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
}

impl ValidatedRequest {
    /// Cache key for the generation result: folded letters plus language
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.letters.as_str(), self.language.code())
    }
}

impl GenerationRequest {
    /// Create a request with default language, bounds and filters
    #[must_use]
    pub fn new(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            language: Language::default(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            filters: None,
        }
    }

    /// Validate the request without performing any generation work
    ///
    /// # Errors
    /// Returns `RequestError` when the characters, length bounds or complexity
    /// bounds are out of range.
    pub fn validate(&self) -> Result<ValidatedRequest, RequestError> {
        let letters = LetterSet::new(&self.characters, self.language)?;

        let (min, max) = (self.min_length, self.max_length);
        if min < MIN_LETTERS || max > MAX_LETTERS || min > max {
            return Err(RequestError::InvalidLengthBounds { min, max });
        }

        let filters = self.filters.unwrap_or_default();
        let complexity = match (filters.min_complexity, filters.max_complexity) {
            (None, None) => None,
            (min_c, max_c) => {
                let min_c = min_c.unwrap_or(MIN_COMPLEXITY);
                let max_c = max_c.unwrap_or(MAX_COMPLEXITY);
                if min_c < MIN_COMPLEXITY || max_c > MAX_COMPLEXITY || min_c > max_c {
                    return Err(RequestError::InvalidComplexityBounds {
                        min: min_c,
                        max: max_c,
                    });
                }
                Some(ComplexityRange { min: min_c, max: max_c })
            }
        };

        Ok(ValidatedRequest {
            letters,
            language: self.language,
            min_length: min,
            max_length: max,
            complexity,
            sort_by: filters.sort_by,
            sort_order: filters.sort_order.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_when_fields_missing() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"characters":"cat"}"#).unwrap();

        assert_eq!(request.language, Language::English);
        assert_eq!(request.min_length, 2);
        assert_eq!(request.max_length, 15);
        assert!(request.filters.is_none());
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"characters":"stone","language":"de","minLength":3,"maxLength":4,
                "filters":{"minComplexity":2,"sortBy":"complexity","sortOrder":"desc"}}"#,
        )
        .unwrap();

        assert_eq!(request.language, Language::German);
        let validated = request.validate().unwrap();
        assert_eq!(validated.complexity, Some(ComplexityRange { min: 2, max: 10 }));
        assert_eq!(validated.sort_by, Some(SortBy::Complexity));
        assert_eq!(validated.sort_order, SortOrder::Desc);
    }

    #[test]
    fn validate_rejects_bad_characters() {
        assert!(GenerationRequest::new("c4t").validate().is_err());
        assert!(GenerationRequest::new("x").validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_length_bounds() {
        let mut request = GenerationRequest::new("cat");
        request.min_length = 5;
        request.max_length = 3;

        assert!(matches!(
            request.validate(),
            Err(RequestError::InvalidLengthBounds { min: 5, max: 3 })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_complexity() {
        let mut request = GenerationRequest::new("cat");
        request.filters = Some(Filters {
            min_complexity: Some(0),
            ..Filters::default()
        });
        assert!(request.validate().is_err());

        let mut request = GenerationRequest::new("cat");
        request.filters = Some(Filters {
            max_complexity: Some(11),
            ..Filters::default()
        });
        assert!(request.validate().is_err());
    }

    #[test]
    fn partial_complexity_filter_fills_the_other_bound() {
        let mut request = GenerationRequest::new("cat");
        request.filters = Some(Filters {
            min_complexity: Some(6),
            ..Filters::default()
        });

        let validated = request.validate().unwrap();
        assert_eq!(validated.complexity, Some(ComplexityRange { min: 6, max: 10 }));
    }

    #[test]
    fn cache_key_is_folded_characters_and_language() {
        let mut request = GenerationRequest::new("Café");
        request.language = Language::French;

        let validated = request.validate().unwrap();
        assert_eq!(validated.cache_key(), "cafe:fr");
    }
}
