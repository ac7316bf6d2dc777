//! Generation resource ceilings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default maximum number of counted arrangements
pub const DEFAULT_MAX_COMBINATIONS: usize = 100_000;

/// Default wall-clock budget for one generation run
pub const DEFAULT_MAX_DURATION: Duration = Duration::from_millis(5_000);

/// Default retained-memory budget (512 MB)
pub const DEFAULT_MAX_MEMORY_BYTES: usize = 512 * 1024 * 1024;

/// Hard resource ceilings enforced during generation
///
/// Breaching any ceiling stops enumeration and returns the partial result set
/// with `truncated.status = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorLimits {
    /// Stop once this many length-valid arrangements have been counted
    pub max_combinations: usize,
    /// Abort once this much wall-clock time has elapsed
    pub max_duration: Duration,
    /// Abort once the retained result estimate exceeds this many bytes
    pub max_memory_bytes: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            max_duration: DEFAULT_MAX_DURATION,
            max_memory_bytes: DEFAULT_MAX_MEMORY_BYTES,
        }
    }
}

/// Which ceiling stopped a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationReason {
    CombinationLimit,
    TimeLimit,
    MemoryLimit,
}

impl fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CombinationLimit => write!(f, "combination limit reached"),
            Self::TimeLimit => write!(f, "time limit exceeded"),
            Self::MemoryLimit => write!(f, "memory limit exceeded"),
        }
    }
}

/// Truncation marker carried on every generation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    /// True when a ceiling stopped enumeration early
    pub status: bool,
    /// The ceiling that was hit, when `status` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<TruncationReason>,
}

impl Truncation {
    /// A run that completed without hitting any ceiling
    #[must_use]
    pub const fn none() -> Self {
        Self {
            status: false,
            reason: None,
        }
    }

    /// A run stopped by the given ceiling
    #[must_use]
    pub const fn hit(reason: TruncationReason) -> Self {
        Self {
            status: true,
            reason: Some(reason),
        }
    }
}
