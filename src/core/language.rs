//! Supported dictionary languages
//!
//! A Language selects the dictionary used for validation and the diacritic
//! folding applied before lookup, so equivalent spellings share one cache entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dictionary language supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

/// Error type for unrecognized language codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language code: {0:?} (expected en, es, fr, or de)")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// All supported languages, in a fixed order
    pub const ALL: [Self; 4] = [Self::English, Self::Spanish, Self::French, Self::German];

    /// The two-letter code used in requests and cache keys
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
        }
    }

    /// Parse a two-letter language code
    ///
    /// # Errors
    /// Returns `UnsupportedLanguage` for anything other than en/es/fr/de.
    pub fn from_code(code: &str) -> Result<Self, UnsupportedLanguage> {
        match code {
            "en" => Ok(Self::English),
            "es" => Ok(Self::Spanish),
            "fr" => Ok(Self::French),
            "de" => Ok(Self::German),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }

    /// Fold a word to its canonical lookup form
    ///
    /// Lowercases, trims, and strips language-specific diacritics so that
    /// equivalent spellings map to a single dictionary/cache key
    /// (e.g. French "café" → "cafe", German "grüße" → "gruesse").
    #[must_use]
    pub fn fold(self, word: &str) -> String {
        let lowered = word.trim().to_lowercase();
        let mut folded = String::with_capacity(lowered.len());

        for ch in lowered.chars() {
            match self.fold_char(ch) {
                Folded::Keep => folded.push(ch),
                Folded::One(c) => folded.push(c),
                Folded::Two(a, b) => {
                    folded.push(a);
                    folded.push(b);
                }
            }
        }

        folded
    }

    fn fold_char(self, ch: char) -> Folded {
        match self {
            Self::German => match ch {
                'ä' => Folded::Two('a', 'e'),
                'ö' => Folded::Two('o', 'e'),
                'ü' => Folded::Two('u', 'e'),
                'ß' => Folded::Two('s', 's'),
                _ => Folded::Keep,
            },
            Self::French => match ch {
                'à' | 'â' => Folded::One('a'),
                'é' | 'è' | 'ê' | 'ë' => Folded::One('e'),
                'î' | 'ï' => Folded::One('i'),
                'ô' => Folded::One('o'),
                'ù' | 'û' | 'ü' => Folded::One('u'),
                'ç' => Folded::One('c'),
                _ => Folded::Keep,
            },
            Self::Spanish => match ch {
                'á' => Folded::One('a'),
                'é' => Folded::One('e'),
                'í' => Folded::One('i'),
                'ó' => Folded::One('o'),
                'ú' | 'ü' => Folded::One('u'),
                'ñ' => Folded::One('n'),
                _ => Folded::Keep,
            },
            Self::English => Folded::Keep,
        }
    }
}

enum Folded {
    Keep,
    One(char),
    Two(char, char),
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
