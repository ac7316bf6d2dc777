//! Word complexity scoring
//!
//! Scores a candidate string's difficulty on a 1-10 scale from length,
//! character uniqueness, repetition and vowel/consonant alternation.
//! Pure and deterministic: the same string always gets the same score.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Lowest possible complexity score
pub const MIN_COMPLEXITY: u8 = 1;

/// Highest possible complexity score
pub const MAX_COMPLEXITY: u8 = 10;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Per-term breakdown of a complexity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// The scored word (lowercased)
    pub word: String,
    /// Character count
    pub length: usize,
    /// Distinct character count
    pub distinct_chars: usize,
    /// Length term: `log2(length) * 2`
    pub base: f64,
    /// Uniqueness term: `(distinct / length) * 3`
    pub uniqueness: f64,
    /// Number of immediately-repeated substring runs, each subtracting 1
    pub repetition_runs: usize,
    /// Vowel/consonant adjacency transitions, each adding 0.5
    pub alternations: usize,
    /// Final score, rounded and clamped to [1,10]
    pub score: u8,
}

/// Score a word's complexity on the 1-10 scale
///
/// The score is the sum of a logarithmic length term, a uniqueness term, a
/// penalty per repeated-substring run, and an alternation bonus, rounded to
/// the nearest integer and clamped to [1,10]. Case-insensitive.
///
/// # Examples
/// ```
/// use wordforge::scoring::score;
///
/// assert_eq!(score("cat"), score("CAT"));
/// assert!(score("aaa") < score("cat")); // repetition penalized
/// assert!((1..=10).contains(&score("extraordinary")));
/// ```
#[must_use]
pub fn score(word: &str) -> u8 {
    breakdown(word).score
}

/// Score a word and return every term of the computation
///
/// Used by the `score` CLI command to explain a result.
#[must_use]
pub fn breakdown(word: &str) -> ScoreBreakdown {
    let lowered = word.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let length = chars.len();

    if length == 0 {
        return ScoreBreakdown {
            word: lowered,
            length: 0,
            distinct_chars: 0,
            base: 0.0,
            uniqueness: 0.0,
            repetition_runs: 0,
            alternations: 0,
            score: MIN_COMPLEXITY,
        };
    }

    let distinct_chars = chars.iter().collect::<FxHashSet<_>>().len();
    let base = (length as f64).log2() * 2.0;
    let uniqueness = (distinct_chars as f64 / length as f64) * 3.0;
    let repetition_runs = repeated_run_count(&chars);
    let alternations = alternation_count(&chars);

    let raw = base + uniqueness - repetition_runs as f64 + 0.5 * alternations as f64;
    let score = raw.round().clamp(f64::from(MIN_COMPLEXITY), f64::from(MAX_COMPLEXITY)) as u8;

    ScoreBreakdown {
        word: lowered,
        length,
        distinct_chars,
        base,
        uniqueness,
        repetition_runs,
        alternations,
        score,
    }
}

/// Count maximal immediately-repeated substring runs
///
/// A run is a substring followed directly by one or more copies of itself
/// ("abab", "aaa", "gogogo"). Matching is greedy: at each position the longest
/// repeating unit wins, and the scan resumes after the whole run, so "abab"
/// counts one run, not two.
fn repeated_run_count(chars: &[char]) -> usize {
    let n = chars.len();
    let mut runs = 0;
    let mut i = 0;

    while i < n {
        let max_unit = (n - i) / 2;
        let mut advanced = false;

        for unit in (1..=max_unit).rev() {
            if chars[i..i + unit] == chars[i + unit..i + 2 * unit] {
                let mut end = i + 2 * unit;
                while end + unit <= n && chars[end..end + unit] == chars[i..i + unit] {
                    end += unit;
                }
                runs += 1;
                i = end;
                advanced = true;
                break;
            }
        }

        if !advanced {
            i += 1;
        }
    }

    runs
}

/// Count adjacent vowel↔consonant transitions
fn alternation_count(chars: &[char]) -> usize {
    chars
        .windows(2)
        .filter(|pair| is_vowel(pair[0]) != is_vowel(pair[1]))
        .count()
}

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_deterministic() {
        assert_eq!(score("combination"), score("combination"));
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(score("Cat"), score("cat"));
        assert_eq!(score("BANANA"), score("banana"));
    }

    #[test]
    fn score_always_in_bounds() {
        for word in ["a", "zz", "cat", "aaaaaaaaaaaaaaa", "strengths", "oui", "xylophone"] {
            let s = score(word);
            assert!((MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&s), "{word} scored {s}");
        }
    }

    #[test]
    fn known_score_cat() {
        // log2(3)*2 = 3.170, uniqueness 3/3*3 = 3, no runs, 2 transitions (+1.0)
        // = 7.170 → 7
        assert_eq!(score("cat"), 7);
    }

    #[test]
    fn known_score_all_same_letter() {
        // log2(3)*2 = 3.170, uniqueness 1/3*3 = 1, one run (-1), no transitions
        // = 3.170 → 3
        assert_eq!(score("aaa"), 3);
    }

    #[test]
    fn repetition_lowers_score() {
        assert!(score("aaaa") < score("abcd"));
    }

    #[test]
    fn repeated_runs_counts_basic_cases() {
        let count = |s: &str| repeated_run_count(&s.chars().collect::<Vec<_>>());

        assert_eq!(count("cat"), 0);
        assert_eq!(count("aaa"), 1);
        assert_eq!(count("abab"), 1);
        assert_eq!(count("aabb"), 2);
        assert_eq!(count("gogogo"), 1);
        assert_eq!(count("aabbaabb"), 1); // one "aabb aabb" run, greedy longest unit
    }

    #[test]
    fn alternation_counts_transitions() {
        let count = |s: &str| alternation_count(&s.chars().collect::<Vec<_>>());

        assert_eq!(count("cat"), 2); // c→a, a→t
        assert_eq!(count("aaa"), 0);
        assert_eq!(count("bcd"), 0);
        assert_eq!(count("banana"), 5); // alternates every position
    }

    #[test]
    fn empty_word_gets_minimum() {
        assert_eq!(score(""), MIN_COMPLEXITY);
    }

    #[test]
    fn breakdown_matches_score() {
        let b = breakdown("banana");
        assert_eq!(b.score, score("banana"));
        assert_eq!(b.length, 6);
        assert_eq!(b.distinct_chars, 3);
        assert_eq!(b.alternations, 5);
    }
}
