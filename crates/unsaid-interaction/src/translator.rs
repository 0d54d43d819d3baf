//! Translation agent trait and wire types.

use crate::error::TranslateError;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;

/// Output of a translation agent, in canonical field names.
///
/// Legacy payload keys (`text`, `alternative`, `emotionTags`) are
/// accepted as serde aliases so older model outputs still deserialize;
/// nothing past this boundary sees the aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    /// Neutral rephrasing of the input
    #[serde(alias = "text")]
    pub clear_expression: String,
    /// Non-confrontational rephrasing of the input
    #[serde(alias = "alternative")]
    pub respectful_expression: String,
    /// Detected emotion labels
    #[serde(alias = "emotionTags", default)]
    pub emotions: Vec<String>,
}

impl TranslationOutcome {
    /// Lowercases, trims, and de-duplicates the emotion labels,
    /// preserving first-occurrence order.
    pub fn normalize_emotions(&mut self) {
        let mut seen = HashSet::new();
        let emotions = std::mem::take(&mut self.emotions);
        self.emotions = emotions
            .into_iter()
            .map(|emotion| emotion.trim().to_lowercase())
            .filter(|emotion| !emotion.is_empty() && seen.insert(emotion.clone()))
            .collect();
    }
}

/// An agent that translates raw emotional text into the clear/respectful
/// rephrasing pair plus emotion labels.
#[async_trait]
pub trait EmotionTranslator: Send + Sync {
    /// Short description of what this translator is good at.
    fn expertise(&self) -> &str;

    /// Translates the given raw text.
    async fn translate(&self, text: &str) -> Result<TranslationOutcome, TranslateError>;
}
