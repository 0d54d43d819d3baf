//! Core domain layer for UNSAID.
//!
//! Everything here is pure and synchronous: the keyword emotion
//! classifier, the contextual analyzer, the two validation generation
//! strategies with their display metadata, and the translation record
//! model with its repository trait. No I/O happens in this crate; the
//! only non-determinism is template selection through a caller-supplied
//! random source.

pub mod emotion;
pub mod error;
pub mod translation;
pub mod validation;

// Re-export common error type
pub use error::UnsaidError;
