//! Circuit breaker for the dictionary provider
//!
//! Tracks provider health across requests and stops calling a failing backend
//! for a cooldown period. One breaker exists per provider instance, shared via
//! `Arc`; re-creating it per request would lose the health history it exists
//! to keep.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Breaker tuning parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitBreakerConfig {
    /// Failure rate over the rolling window that opens the breaker
    pub failure_threshold: f64,
    /// Number of recent call outcomes kept in the rolling window
    pub window_size: usize,
    /// Minimum observed calls before the breaker may open
    pub min_calls: usize,
    /// How long the breaker stays open before probing recovery
    pub reset_timeout: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 0.5,
            window_size: 10,
            min_calls: 4,
            reset_timeout: Duration::from_secs(30),
        }
    }
}

/// Breaker state, in the classic three-state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Calls pass through; outcomes feed the rolling window
    Closed,
    /// Calls are rejected until the reset timeout elapses
    Open,
    /// One probe call is allowed through to test recovery
    HalfOpen,
}

/// Error returned by [`CircuitBreaker::execute`]
#[derive(Debug, thiserror::Error)]
pub enum BreakerError<E> {
    /// The breaker is open; the operation was not attempted
    #[error("Circuit breaker is open")]
    Open,
    /// The operation ran and failed
    #[error(transparent)]
    Operation(E),
}

struct Inner {
    state: CircuitState,
    window: VecDeque<bool>,
    opened_at: Option<Instant>,
    /// A half-open probe is currently in flight; other callers are rejected
    probing: bool,
}

/// Stateful guard around a failure-prone operation
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    inner: Mutex<Inner>,
}

impl CircuitBreaker {
    /// Create a breaker with the given configuration
    #[must_use]
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                state: CircuitState::Closed,
                window: VecDeque::new(),
                opened_at: None,
                probing: false,
            }),
        }
    }

    /// Current state, transitioning open → half-open if the timeout elapsed
    #[must_use]
    pub fn state(&self) -> CircuitState {
        let Ok(mut inner) = self.inner.lock() else {
            return CircuitState::Open;
        };
        self.refresh(&mut inner);
        inner.state
    }

    /// Run an operation through the breaker
    ///
    /// # Errors
    /// Returns `BreakerError::Open` without running the operation when the
    /// breaker is open (or half-open with a probe already in flight), or
    /// `BreakerError::Operation` wrapping the operation's own error.
    pub fn execute<T, E, F>(&self, operation: F) -> Result<T, BreakerError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        {
            let Ok(mut inner) = self.inner.lock() else {
                // A poisoned breaker behaves as permanently open
                return Err(BreakerError::Open);
            };
            self.refresh(&mut inner);
            match inner.state {
                CircuitState::Open => return Err(BreakerError::Open),
                CircuitState::HalfOpen => {
                    // Exactly one caller probes; the rest stay rejected until
                    // the probe's outcome is recorded
                    if inner.probing {
                        return Err(BreakerError::Open);
                    }
                    inner.probing = true;
                }
                CircuitState::Closed => {}
            }
        }

        // The lock is not held across the call itself
        let outcome = operation();

        if let Ok(mut inner) = self.inner.lock() {
            self.record(&mut inner, outcome.is_ok());
        }

        outcome.map_err(BreakerError::Operation)
    }

    /// Move open → half-open once the reset timeout has elapsed
    fn refresh(&self, inner: &mut Inner) {
        if inner.state == CircuitState::Open {
            let elapsed = inner.opened_at.map(|at| at.elapsed()).unwrap_or_default();
            if elapsed >= self.config.reset_timeout {
                info!("circuit breaker half-open, probing recovery");
                inner.state = CircuitState::HalfOpen;
            }
        }
    }

    fn record(&self, inner: &mut Inner, success: bool) {
        match inner.state {
            CircuitState::HalfOpen => {
                inner.probing = false;
                if success {
                    info!("circuit breaker closed after successful probe");
                    inner.state = CircuitState::Closed;
                    inner.window.clear();
                    inner.opened_at = None;
                } else {
                    warn!("circuit breaker re-opened after failed probe");
                    inner.state = CircuitState::Open;
                    inner.opened_at = Some(Instant::now());
                }
            }
            CircuitState::Closed => {
                inner.window.push_back(success);
                while inner.window.len() > self.config.window_size {
                    inner.window.pop_front();
                }

                let observed = inner.window.len();
                if observed >= self.config.min_calls {
                    let failures = inner.window.iter().filter(|ok| !**ok).count();
                    let rate = failures as f64 / observed as f64;
                    if rate > self.config.failure_threshold {
                        warn!(
                            failure_rate = rate,
                            observed, "circuit breaker opened"
                        );
                        inner.state = CircuitState::Open;
                        inner.opened_at = Some(Instant::now());
                    }
                }
            }
            // A concurrent probe already resolved the half-open state
            CircuitState::Open => {}
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(CircuitBreakerConfig::default())
    }
}
