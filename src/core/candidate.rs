//! Generated candidate words

use serde::{Deserialize, Serialize};

/// A dictionary definition attached to a valid candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// The primary sense of the word
    pub text: String,
    /// Part of speech, when the dictionary provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

impl Definition {
    /// Create a definition with no part-of-speech tag
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            part_of_speech: None,
        }
    }
}

/// One generated letter arrangement
///
/// Created by the generator with `is_valid` unset, enriched exactly once when
/// validation results are merged in, and immutable from the caller's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The arrangement, lowercase and language-folded
    pub word: String,
    /// Cached `word` length, used for filtering and statistics
    pub length: usize,
    /// Complexity score in [1,10], computed once per unique string
    pub complexity: u8,
    /// Whether the dictionary recognizes this word
    pub is_valid: bool,
    /// Definition, populated only for valid words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Definition>,
}

impl Candidate {
    /// Create an unvalidated candidate
    #[must_use]
    pub fn new(word: String, complexity: u8) -> Self {
        let length = word.chars().count();
        Self {
            word,
            length,
            complexity,
            is_valid: false,
            definition: None,
        }
    }
}
