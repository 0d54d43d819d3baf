//! Validation generation module.
//!
//! Two independent strategies produce the affirming sentence attached to
//! every translation:
//!
//! - `contextual`: the preferred, context-aware generator driven by the
//!   analyzer's [`EmotionalContext`](crate::emotion::EmotionalContext)
//! - `fallback`: the keyword-weighted generator that works directly off
//!   the draft's emotion labels and text
//!
//! The two use different trigger conditions and template pools with no
//! shared ground truth; they stay separate behind the
//! [`ValidationStrategy`] trait so the orchestrator can invoke either.

mod category;
mod contextual;
mod fallback;

pub use category::ValidationCategory;
pub use contextual::generate_contextual_validation;
pub use fallback::generate_validation;

use crate::emotion::analyze_context;
use crate::translation::TranslationDraft;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Hard-coded sentence substituted when every generator yields an empty
/// string. Records never persist an empty validation.
pub const DEFAULT_VALIDATION: &str =
    "Your feelings are valid and deserve to be expressed respectfully.";

/// A swappable validation generator.
///
/// Implementations own their random source; callers inject a seeded one
/// for deterministic tests.
pub trait ValidationStrategy: Send {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Produces an affirming sentence for the draft.
    fn generate(&mut self, draft: &TranslationDraft) -> String;
}

/// Strategy wrapper for the context-aware generator (preferred path).
pub struct ContextualValidationStrategy<R: Rng = StdRng> {
    rng: R,
}

impl ContextualValidationStrategy<StdRng> {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for ContextualValidationStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ContextualValidationStrategy<R> {
    /// Creates a strategy with an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> ValidationStrategy for ContextualValidationStrategy<R> {
    fn name(&self) -> &'static str {
        "contextual"
    }

    fn generate(&mut self, draft: &TranslationDraft) -> String {
        let context = analyze_context(draft);
        generate_contextual_validation(&context, &mut self.rng)
    }
}

/// Strategy wrapper for the keyword-weighted fallback generator.
pub struct WeightedFallbackStrategy<R: Rng = StdRng> {
    rng: R,
}

impl WeightedFallbackStrategy<StdRng> {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for WeightedFallbackStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WeightedFallbackStrategy<R> {
    /// Creates a strategy with an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> ValidationStrategy for WeightedFallbackStrategy<R> {
    fn name(&self) -> &'static str {
        "weighted-fallback"
    }

    fn generate(&mut self, draft: &TranslationDraft) -> String {
        generate_validation(draft, &mut self.rng)
    }
}
