//! Word Forge
//!
//! Letter-combination generation and dictionary validation engine: given a set
//! of input letters, enumerate candidate arrangements under hard resource
//! ceilings, score their complexity, validate them against a dictionary in
//! cached, circuit-broken batches, and return an aggregate result envelope.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordforge::cache::InMemoryTtlCache;
//! use wordforge::dictionary::StaticDictionary;
//! use wordforge::service::{GenerationRequest, WordService};
//! use wordforge::validation::{BatchValidator, CircuitBreaker};
//!
//! let validator = BatchValidator::new(
//!     Arc::new(StaticDictionary::starter()),
//!     Arc::new(InMemoryTtlCache::new()),
//!     Arc::new(CircuitBreaker::default()),
//! );
//! let service = WordService::new(validator, Arc::new(InMemoryTtlCache::new()));
//!
//! let response = service.generate(&GenerationRequest::new("cat")).unwrap();
//! assert!(response.success);
//! ```

// Core domain types
pub mod core;

// Complexity scoring
pub mod scoring;

// Arrangement generation under resource ceilings
pub mod generator;

// TTL caching
pub mod cache;

// Batched dictionary validation
pub mod validation;

// Generation orchestration
pub mod service;

// In-memory dictionary backends
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
