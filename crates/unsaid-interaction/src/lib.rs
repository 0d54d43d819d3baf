//! Remote translation boundary for UNSAID.
//!
//! This crate owns everything that talks to (or stands in for) the
//! third-party generative API: the [`EmotionTranslator`] trait, the
//! Gemini REST implementation with model rotation, the local keyword
//! fallback, and secret configuration loading.

pub mod config;
pub mod error;
pub mod gemini_translator;
pub mod keyword_translator;
pub mod translator;

pub use config::{GeminiConfig, SecretConfig, load_secret_config};
pub use error::TranslateError;
pub use gemini_translator::GeminiTranslator;
pub use keyword_translator::KeywordFallbackTranslator;
pub use translator::{EmotionTranslator, TranslationOutcome};
