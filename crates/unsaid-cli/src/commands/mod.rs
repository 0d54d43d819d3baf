pub mod delete;
pub mod history;
pub mod translate;

use anyhow::Result;
use std::sync::Arc;
use unsaid_application::TranslationService;
use unsaid_infrastructure::TomlTranslationRepository;
use unsaid_interaction::{EmotionTranslator, GeminiTranslator, KeywordFallbackTranslator};

/// Builds the translation service with the default storage location.
///
/// The Gemini translator is used when credentials are available; without
/// them the local keyword translator serves as the primary path so the
/// CLI keeps working offline.
pub fn build_service() -> Result<TranslationService> {
    let repository = Arc::new(TomlTranslationRepository::default_location()?);

    let translator: Arc<dyn EmotionTranslator> = match GeminiTranslator::try_from_env() {
        Ok(agent) => Arc::new(agent),
        Err(err) => {
            tracing::warn!(error = %err, "Gemini unavailable, using local keyword translator");
            Arc::new(KeywordFallbackTranslator::new())
        }
    };

    Ok(TranslationService::new(repository, translator))
}
