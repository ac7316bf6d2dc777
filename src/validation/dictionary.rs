//! Dictionary lookup provider trait

use crate::core::{Definition, Language};

/// Error type for dictionary backends
#[derive(Debug, Clone, thiserror::Error)]
#[error("Dictionary lookup failed: {0}")]
pub struct DictionaryError(pub String);

/// Outcome of a single dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    /// Whether the dictionary recognizes the word
    pub is_valid: bool,
    /// Definition, when the word is valid and the backend provides one
    pub definition: Option<Definition>,
}

impl LookupOutcome {
    /// An unrecognized word
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            is_valid: false,
            definition: None,
        }
    }
}

/// Pluggable dictionary backend
///
/// Words reach the provider already normalized (lowercase, trimmed,
/// language-folded). The trait is object-safe and sync; backends needing
/// mutation use interior mutability.
pub trait DictionaryProvider: Send + Sync {
    /// Look up one word
    ///
    /// # Errors
    /// Returns `DictionaryError` when the backend is unreachable.
    fn lookup(&self, word: &str, language: Language) -> Result<LookupOutcome, DictionaryError>;

    /// Look up a batch of words, preserving order
    ///
    /// The default implementation loops over [`DictionaryProvider::lookup`];
    /// backends with a real batch API should override it.
    ///
    /// # Errors
    /// Returns `DictionaryError` when the backend is unreachable; a batch
    /// fails or succeeds as a unit.
    fn lookup_batch(
        &self,
        words: &[String],
        language: Language,
    ) -> Result<Vec<LookupOutcome>, DictionaryError> {
        words.iter().map(|word| self.lookup(word, language)).collect()
    }

    /// Human-readable backend name, for logging
    fn name(&self) -> &str {
        "dictionary"
    }
}
