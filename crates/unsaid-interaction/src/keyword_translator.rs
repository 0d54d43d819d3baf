//! Local fallback translator built on the keyword emotion classifier.

use crate::error::TranslateError;
use crate::translator::{EmotionTranslator, TranslationOutcome};
use async_trait::async_trait;
use unsaid_core::emotion::classify_emotions;

/// Translator of last resort: classifies emotions locally and rephrases
/// with fixed I-statement templates. Never fails and never touches the
/// network, so the orchestrator can always fall back to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFallbackTranslator;

impl KeywordFallbackTranslator {
    /// Creates a new fallback translator.
    pub fn new() -> Self {
        Self
    }

    fn rephrase(emotions: &[String]) -> (String, String) {
        let summary = join_labels(emotions);
        let clear = format!("I feel {summary} about what happened.");
        let respectful =
            format!("I want to share that I feel {summary}, and I would like us to talk about it.");
        (clear, respectful)
    }
}

/// Joins labels into a readable phrase: "angry", "angry and sad",
/// "angry, sad and lonely".
fn join_labels(labels: &[String]) -> String {
    match labels {
        [] => "emotional".to_string(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

#[async_trait]
impl EmotionTranslator for KeywordFallbackTranslator {
    fn expertise(&self) -> &str {
        "Keyword-based local fallback for emotional rephrasing"
    }

    async fn translate(&self, text: &str) -> Result<TranslationOutcome, TranslateError> {
        let emotions = classify_emotions(text);
        let (clear_expression, respectful_expression) = Self::rephrase(&emotions);

        Ok(TranslationOutcome {
            clear_expression,
            respectful_expression,
            emotions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_translates_without_failing() {
        let translator = KeywordFallbackTranslator::new();
        let outcome = translator
            .translate("I can't stand this anymore, everything feels so overwhelming")
            .await
            .unwrap();

        assert_eq!(outcome.emotions, vec!["overwhelmed", "stressed"]);
        assert_eq!(
            outcome.clear_expression,
            "I feel overwhelmed and stressed about what happened."
        );
        assert!(outcome.respectful_expression.contains("overwhelmed and stressed"));
    }

    #[tokio::test]
    async fn test_unmatched_text_uses_default_labels() {
        let translator = KeywordFallbackTranslator::new();
        let outcome = translator.translate("nothing matches here").await.unwrap();

        assert_eq!(outcome.emotions, vec!["emotional", "expressive"]);
        assert!(!outcome.clear_expression.is_empty());
    }

    #[test]
    fn test_join_labels_phrasing() {
        let one = vec!["sad".to_string()];
        let three = vec!["sad".to_string(), "lonely".to_string(), "hurt".to_string()];
        assert_eq!(join_labels(&[]), "emotional");
        assert_eq!(join_labels(&one), "sad");
        assert_eq!(join_labels(&three), "sad, lonely and hurt");
    }
}
