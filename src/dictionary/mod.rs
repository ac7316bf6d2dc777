//! In-memory dictionary backends
//!
//! `StaticDictionary` serves lookups from a word list held in memory. The CLI
//! builds one from the embedded starter list or a user-supplied file; tests
//! build small fixed ones. Production deployments would implement
//! [`DictionaryProvider`] over a real dictionary API instead.

use crate::core::{Definition, Language};
use crate::validation::{DictionaryError, DictionaryProvider, LookupOutcome};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// A small embedded English word list for demos and quick starts
///
/// Short, common words chosen to give small letter pools a fair chance of
/// producing hits.
pub const STARTER_WORDS: &[(&str, &str)] = &[
    ("act", "to do something"),
    ("ant", "a small industrious insect"),
    ("art", "creative human expression"),
    ("at", "indicating a location"),
    ("ate", "past tense of eat"),
    ("cat", "a small domesticated feline"),
    ("dog", "a domesticated canine"),
    ("ear", "the organ of hearing"),
    ("eat", "to consume food"),
    ("era", "a period of history"),
    ("go", "to move from one place to another"),
    ("hat", "a head covering"),
    ("it", "third person neuter pronoun"),
    ("net", "an open-meshed fabric"),
    ("no", "a negative reply"),
    ("note", "a brief written record"),
    ("on", "in contact with a surface"),
    ("one", "the number after zero"),
    ("rat", "a long-tailed rodent"),
    ("rate", "a measure per unit"),
    ("sat", "past tense of sit"),
    ("sea", "a large body of salt water"),
    ("set", "to put in position"),
    ("star", "a luminous celestial body"),
    ("stone", "a small piece of rock"),
    ("ta", "an informal thanks"),
    ("tac", "a variant spelling of tack"),
    ("tan", "a yellowish-brown color"),
    ("tar", "a dark viscous liquid"),
    ("tea", "a drink brewed from leaves"),
    ("ten", "the number after nine"),
    ("toe", "a digit of the foot"),
    ("ton", "a unit of weight"),
    ("tone", "the quality of a sound"),
];

/// Dictionary backed by an in-memory word map
///
/// Stores words per language, keyed by their folded form.
pub struct StaticDictionary {
    words: FxHashMap<Language, FxHashMap<String, Option<Definition>>>,
    name: String,
}

impl StaticDictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: FxHashMap::default(),
            name: "static".to_string(),
        }
    }

    /// Create a dictionary preloaded with the embedded starter list (English)
    #[must_use]
    pub fn starter() -> Self {
        let mut dictionary = Self::new();
        dictionary.name = "starter".to_string();
        for (word, definition) in STARTER_WORDS {
            dictionary.insert(
                Language::English,
                word,
                Some(Definition::new((*definition).to_string())),
            );
        }
        dictionary
    }

    /// Create a dictionary from a newline-separated word list file
    ///
    /// Blank lines are skipped; entries carry no definitions.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordforge::core::Language;
    /// use wordforge::dictionary::StaticDictionary;
    ///
    /// let dictionary =
    ///     StaticDictionary::from_file("data/english.txt", Language::English).unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, language: Language) -> io::Result<Self> {
        let content = fs::read_to_string(&path)?;

        let mut dictionary = Self::new();
        dictionary.name = path.as_ref().display().to_string();
        for line in content.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                dictionary.insert(language, trimmed, None);
            }
        }

        Ok(dictionary)
    }

    /// Add a word, folding it to its canonical form first
    pub fn insert(&mut self, language: Language, word: &str, definition: Option<Definition>) {
        self.words
            .entry(language)
            .or_default()
            .insert(language.fold(word), definition);
    }

    /// Number of words stored for a language
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.words.get(&language).map_or(0, FxHashMap::len)
    }

    /// Whether any words are stored for a language
    #[must_use]
    pub fn is_empty(&self, language: Language) -> bool {
        self.len(language) == 0
    }
}

impl Default for StaticDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryProvider for StaticDictionary {
    fn lookup(&self, word: &str, language: Language) -> Result<LookupOutcome, DictionaryError> {
        let folded = language.fold(word);

        let outcome = self
            .words
            .get(&language)
            .and_then(|entries| entries.get(&folded))
            .map_or_else(LookupOutcome::invalid, |definition| LookupOutcome {
                is_valid: true,
                definition: definition.clone(),
            });

        Ok(outcome)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_list_recognizes_cat() {
        let dictionary = StaticDictionary::starter();

        let outcome = dictionary.lookup("cat", Language::English).unwrap();
        assert!(outcome.is_valid);
        assert!(outcome.definition.is_some());

        let outcome = dictionary.lookup("zzz", Language::English).unwrap();
        assert!(!outcome.is_valid);
    }

    #[test]
    fn lookup_is_language_scoped() {
        let mut dictionary = StaticDictionary::new();
        dictionary.insert(Language::Spanish, "gato", None);

        assert!(dictionary.lookup("gato", Language::Spanish).unwrap().is_valid);
        assert!(!dictionary.lookup("gato", Language::English).unwrap().is_valid);
    }

    #[test]
    fn lookup_folds_the_query() {
        let mut dictionary = StaticDictionary::new();
        dictionary.insert(Language::French, "café", None);

        // Stored and queried forms both fold to "cafe"
        assert!(dictionary.lookup("CAFÉ", Language::French).unwrap().is_valid);
        assert!(dictionary.lookup("cafe", Language::French).unwrap().is_valid);
    }

    #[test]
    fn batch_lookup_preserves_order() {
        let dictionary = StaticDictionary::starter();
        let words = vec!["cat".to_string(), "zzz".to_string(), "act".to_string()];

        let outcomes = dictionary.lookup_batch(&words, Language::English).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_valid);
        assert!(!outcomes[1].is_valid);
        assert!(outcomes[2].is_valid);
    }

    #[test]
    fn empty_dictionary_reports_empty() {
        let dictionary = StaticDictionary::new();
        assert!(dictionary.is_empty(Language::English));
        assert_eq!(dictionary.len(Language::English), 0);
    }
}
