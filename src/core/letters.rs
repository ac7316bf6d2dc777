//! Input letter multiset
//!
//! A `LetterSet` is the validated source pool for generation: 2-15 alphabetic
//! characters, lowercased and language-folded, with duplicates preserved.

use super::Language;
use rustc_hash::FxHashMap;
use std::fmt;

/// Minimum number of source letters
pub const MIN_LETTERS: usize = 2;

/// Maximum number of source letters
pub const MAX_LETTERS: usize = 15;

/// A validated multiset of source letters
///
/// Duplicates are meaningful: "aab" can produce "aab", "aba" and "baa" as
/// distinct arrangements, but never the same concrete string twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
    counts: FxHashMap<char, usize>,
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterSetError {
    #[error("Expected {MIN_LETTERS}-{MAX_LETTERS} letters, got {0}")]
    InvalidLength(usize),
    #[error("Letters must be alphabetic, got {0:?}")]
    NonAlphabetic(char),
}

impl LetterSet {
    /// Create a letter set from raw request characters
    ///
    /// The 2-15 length bound applies to the characters as given (trimmed);
    /// folding happens afterwards and may expand the stored set beyond the
    /// bound, as with German "ß" → "ss". Lowercasing and the language fold are
    /// applied before the alphabetic check, so "café" in French becomes the
    /// letters `c a f e`.
    ///
    /// # Errors
    /// Returns `LetterSetError` if the input is outside 2-15 characters or the
    /// folded form contains anything non-alphabetic.
    ///
    /// # Examples
    /// ```
    /// use wordforge::core::{Language, LetterSet};
    ///
    /// let letters = LetterSet::new("Cat", Language::English).unwrap();
    /// assert_eq!(letters.as_str(), "cat");
    ///
    /// assert!(LetterSet::new("x", Language::English).is_err());
    /// assert!(LetterSet::new("c4t", Language::English).is_err());
    /// ```
    pub fn new(characters: &str, language: Language) -> Result<Self, LetterSetError> {
        let raw_len = characters.trim().chars().count();
        if !(MIN_LETTERS..=MAX_LETTERS).contains(&raw_len) {
            return Err(LetterSetError::InvalidLength(raw_len));
        }

        let folded = language.fold(characters);
        let letters: Vec<char> = folded.chars().collect();

        if let Some(&bad) = letters.iter().find(|c| !c.is_alphabetic()) {
            return Err(LetterSetError::NonAlphabetic(bad));
        }

        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for &ch in &letters {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self { letters, counts })
    }

    /// The folded letters in their original order
    #[must_use]
    pub fn as_str(&self) -> String {
        self.letters.iter().collect()
    }

    /// Number of source letters (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the set is empty (never true for a constructed set)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Per-letter occurrence counts
    #[must_use]
    pub fn counts(&self) -> &FxHashMap<char, usize> {
        &self.counts
    }

    /// Distinct letters in sorted order
    ///
    /// The generator branches over this list, which makes emission order
    /// deterministic for a given input.
    #[must_use]
    pub fn distinct_sorted(&self) -> Vec<char> {
        let mut distinct: Vec<char> = self.counts.keys().copied().collect();
        distinct.sort_unstable();
        distinct
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
