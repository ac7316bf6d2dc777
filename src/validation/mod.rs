//! Dictionary validation
//!
//! The batch validator plus its collaborators: the provider trait, the shared
//! circuit breaker, and the validation result types.

mod batch;
mod breaker;
mod dictionary;

pub use batch::{
    BatchValidator, DEFAULT_BATCH_SIZE, VALIDATION_TTL, ValidationReport, ValidationResult,
    ValidationSource,
};
pub use breaker::{BreakerError, CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use dictionary::{DictionaryError, DictionaryProvider, LookupOutcome};
