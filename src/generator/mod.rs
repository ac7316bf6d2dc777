//! Letter arrangement generation
//!
//! Enumerates all length-bounded, order-sensitive arrangements of a letter
//! multiset under hard ceilings on result count, wall-clock time and retained
//! memory. Worst case is factorial in the number of distinct letters; the
//! ceilings exist to bound that blow-up, and hitting one is a successful
//! partial result, never an error.

mod limits;

pub use limits::{GeneratorLimits, Truncation, TruncationReason};

use crate::core::{Candidate, LetterSet};
use crate::scoring;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Inclusive complexity filter on the 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityRange {
    pub min: u8,
    pub max: u8,
}

impl ComplexityRange {
    /// Whether a score falls inside the range
    #[must_use]
    pub const fn contains(self, complexity: u8) -> bool {
        complexity >= self.min && complexity <= self.max
    }
}

/// Output of one generation run
#[derive(Debug, Clone)]
pub struct GeneratedSet {
    /// Unique arrangements that passed the complexity filter, in generation order
    pub combinations: Vec<Candidate>,
    /// All length-valid unique arrangements, counted before complexity filtering
    pub total_generated: usize,
    /// Whether and why enumeration stopped early
    pub truncated: Truncation,
    /// Estimated bytes retained by `combinations`
    pub memory_bytes: usize,
}

/// Rough retained size of one candidate beyond its string bytes
const CANDIDATE_OVERHEAD: usize = std::mem::size_of::<Candidate>();

/// One pending arrangement prefix on the work stack
struct Frame {
    prefix: String,
    /// Remaining occurrences per distinct letter, aligned with the sorted
    /// distinct-letter table
    remaining: Vec<usize>,
}

/// Enumerate arrangements of `letters` with lengths in `[min_length, max_length]`
///
/// Uses an explicit work stack instead of recursion, so stack depth is
/// independent of `max_length` and ceiling checks run between every step.
/// At each depth the distinct remaining letters are tried in sorted order,
/// which deduplicates arrangements at the source (a multiset like "aab" yields
/// "aab", "aba", "baa" exactly once each) and makes emission order
/// deterministic: lexicographic pre-order.
///
/// The complexity filter only gates membership in `combinations`; filtered-out
/// arrangements still count toward `total_generated`, and the combination
/// ceiling is enforced against that total.
///
/// # Examples
/// ```
/// use wordforge::core::{Language, LetterSet};
/// use wordforge::generator::{GeneratorLimits, generate};
///
/// let letters = LetterSet::new("cat", Language::English).unwrap();
/// let set = generate(&letters, 2, 3, None, &GeneratorLimits::default());
///
/// assert_eq!(set.total_generated, 12); // 6 pairs + 6 triples
/// assert!(!set.truncated.status);
/// ```
#[must_use]
pub fn generate(
    letters: &LetterSet,
    min_length: usize,
    max_length: usize,
    complexity: Option<ComplexityRange>,
    limits: &GeneratorLimits,
) -> GeneratedSet {
    let started = Instant::now();
    let distinct = letters.distinct_sorted();
    let max_length = max_length.min(letters.len());

    let root_remaining: Vec<usize> = distinct
        .iter()
        .map(|ch| letters.counts()[ch])
        .collect();

    let mut stack = vec![Frame {
        prefix: String::new(),
        remaining: root_remaining,
    }];

    let mut combinations: Vec<Candidate> = Vec::new();
    let mut total_generated = 0usize;
    let mut memory_bytes = 0usize;
    let mut truncated = Truncation::none();

    while let Some(frame) = stack.pop() {
        // Time and memory are checked on every step, not just emissions, so a
        // deep min_length cannot hide unbounded expansion from the ceilings
        if started.elapsed() >= limits.max_duration {
            truncated = Truncation::hit(TruncationReason::TimeLimit);
            break;
        }
        if memory_bytes >= limits.max_memory_bytes {
            truncated = Truncation::hit(TruncationReason::MemoryLimit);
            break;
        }

        let length = frame.prefix.chars().count();

        if length >= min_length {
            if total_generated >= limits.max_combinations {
                truncated = Truncation::hit(TruncationReason::CombinationLimit);
                break;
            }

            total_generated += 1;

            let score = scoring::score(&frame.prefix);
            if complexity.is_none_or(|range| range.contains(score)) {
                memory_bytes += frame.prefix.len() + CANDIDATE_OVERHEAD;
                combinations.push(Candidate::new(frame.prefix.clone(), score));
            }
        }

        if length < max_length {
            // Reverse order so the stack pops children lexicographically
            for index in (0..distinct.len()).rev() {
                if frame.remaining[index] == 0 {
                    continue;
                }

                let mut prefix = frame.prefix.clone();
                prefix.push(distinct[index]);

                let mut remaining = frame.remaining.clone();
                remaining[index] -= 1;

                stack.push(Frame { prefix, remaining });
            }
        }
    }

    if truncated.status {
        debug!(
            letters = %letters,
            total_generated,
            reason = ?truncated.reason,
            "generation truncated"
        );
    }

    GeneratedSet {
        combinations,
        total_generated,
        truncated,
        memory_bytes,
    }
}
