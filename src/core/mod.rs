//! Core domain types
//!
//! The fundamental types shared across the engine: languages with their folding
//! rules, the validated input letter multiset, and candidate words.

mod candidate;
mod language;
mod letters;

pub use candidate::{Candidate, Definition};
pub use language::{Language, UnsupportedLanguage};
pub use letters::{LetterSet, LetterSetError, MAX_LETTERS, MIN_LETTERS};
