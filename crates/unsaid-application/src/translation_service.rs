//! Translation orchestration use case.
//!
//! `TranslationService` coordinates the remote translator, the local
//! keyword fallback, the validation strategies, and the persistence layer
//! to implement the full translate/history/delete surface.

use std::sync::{Arc, Mutex, PoisonError};
use unsaid_core::emotion::classify_emotions;
use unsaid_core::error::Result;
use unsaid_core::translation::{TranslationDraft, TranslationRecord, TranslationRepository};
use unsaid_core::validation::{
    ContextualValidationStrategy, DEFAULT_VALIDATION, ValidationStrategy,
    WeightedFallbackStrategy,
};
use unsaid_core::UnsaidError;
use unsaid_interaction::{EmotionTranslator, KeywordFallbackTranslator};

/// Maximum number of records returned by [`TranslationService::history`].
pub const HISTORY_LIMIT: usize = 50;

/// Use case for producing, storing, and managing translations.
///
/// # Responsibilities
///
/// - Calling the remote translator and falling back to the local keyword
///   translator when it fails
/// - Guaranteeing the record invariants: non-empty lowercase emotions,
///   non-empty validation sentence
/// - Running the validation strategies in precedence order
/// - Persisting records and serving history/deletion requests
///
/// # Thread Safety
///
/// Collaborators are shared via `Arc`; the validation strategies own
/// their random sources behind a `Mutex`.
pub struct TranslationService {
    /// Repository for translation record persistence
    repository: Arc<dyn TranslationRepository>,
    /// Primary (remote) translator
    translator: Arc<dyn EmotionTranslator>,
    /// Local translator used when the primary one fails
    fallback_translator: KeywordFallbackTranslator,
    /// Validation strategies, in precedence order
    strategies: Mutex<Vec<Box<dyn ValidationStrategy>>>,
}

impl TranslationService {
    /// Creates a service with the default validation strategies
    /// (context-aware first, keyword-weighted fallback second).
    pub fn new(
        repository: Arc<dyn TranslationRepository>,
        translator: Arc<dyn EmotionTranslator>,
    ) -> Self {
        Self {
            repository,
            translator,
            fallback_translator: KeywordFallbackTranslator::new(),
            strategies: Mutex::new(vec![
                Box::new(ContextualValidationStrategy::new()),
                Box::new(WeightedFallbackStrategy::new()),
            ]),
        }
    }

    /// Replaces the validation strategies (precedence order). Used by
    /// tests to inject seeded random sources.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn ValidationStrategy>>) -> Self {
        self.strategies = Mutex::new(strategies);
        self
    }

    /// Translates raw emotional text and persists the result for the
    /// session.
    ///
    /// The remote translator is tried first; any failure falls back to
    /// the local keyword translator, which cannot fail. A storage failure
    /// is logged but does not fail the call: the translation is still
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`UnsaidError::InvalidInput`] when the text or session id
    /// is empty after trimming.
    pub async fn translate(&self, text: &str, session_id: &str) -> Result<TranslationRecord> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(UnsaidError::invalid_input("Text is required"));
        }

        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(UnsaidError::invalid_input("Session id is required"));
        }

        let mut outcome = match self.translator.translate(trimmed).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "remote translation failed, using keyword fallback");
                self.fallback_translator
                    .translate(trimmed)
                    .await
                    .map_err(|e| UnsaidError::translation(e.to_string()))?
            }
        };

        outcome.normalize_emotions();

        // Records never carry an empty emotion list; the classifier
        // always produces labels.
        if outcome.emotions.is_empty() {
            outcome.emotions = classify_emotions(trimmed);
        }

        let draft = TranslationDraft {
            raw_text: trimmed.to_string(),
            clear_expression: outcome.clear_expression,
            respectful_expression: outcome.respectful_expression,
            emotions: outcome.emotions,
        };

        let validation = self.generate_validation(&draft);
        let record = TranslationRecord::create(draft, validation, session_id);

        // Storage failures must not block the response.
        if let Err(err) = self.repository.save(&record).await {
            tracing::error!(error = %err, record_id = %record.id, "failed to persist translation");
        }

        Ok(record)
    }

    /// Runs the validation strategies in precedence order, substituting
    /// the hard-coded default when every strategy yields an empty string.
    fn generate_validation(&self, draft: &TranslationDraft) -> String {
        let mut strategies = self
            .strategies
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        for strategy in strategies.iter_mut() {
            let validation = strategy.generate(draft);
            if !validation.trim().is_empty() {
                return validation;
            }
            tracing::debug!(
                strategy = strategy.name(),
                "validation strategy produced empty output"
            );
        }

        DEFAULT_VALIDATION.to_string()
    }

    /// Returns the session's records, newest first, capped at
    /// [`HISTORY_LIMIT`].
    pub async fn history(&self, session_id: &str) -> Result<Vec<TranslationRecord>> {
        self.repository
            .find_recent(session_id, HISTORY_LIMIT)
            .await
            .map_err(|e| UnsaidError::data_access(e.to_string()))
    }

    /// Deletes a single record by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|e| UnsaidError::data_access(e.to_string()))
    }

    /// Deletes every record belonging to the session, returning how many
    /// were removed.
    pub async fn delete_all(&self, session_id: &str) -> Result<usize> {
        self.repository
            .delete_all(session_id)
            .await
            .map_err(|e| UnsaidError::data_access(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex as StdMutex;
    use unsaid_interaction::{TranslateError, TranslationOutcome};

    /// In-memory repository double.
    #[derive(Default)]
    struct InMemoryRepository {
        records: StdMutex<Vec<TranslationRecord>>,
    }

    #[async_trait]
    impl TranslationRepository for InMemoryRepository {
        async fn save(&self, record: &TranslationRecord) -> anyhow::Result<()> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<TranslationRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn find_recent(
            &self,
            session_id: &str,
            limit: usize,
        ) -> anyhow::Result<Vec<TranslationRecord>> {
            let mut records: Vec<TranslationRecord> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.session_id == session_id)
                .cloned()
                .collect();
            records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            records.truncate(limit);
            Ok(records)
        }

        async fn delete(&self, id: &str) -> anyhow::Result<()> {
            self.records.lock().unwrap().retain(|r| r.id != id);
            Ok(())
        }

        async fn delete_all(&self, session_id: &str) -> anyhow::Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.session_id != session_id);
            Ok(before - records.len())
        }
    }

    /// Repository double whose writes always fail.
    struct FailingRepository;

    #[async_trait]
    impl TranslationRepository for FailingRepository {
        async fn save(&self, _record: &TranslationRecord) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk on fire"))
        }

        async fn find_by_id(&self, _id: &str) -> anyhow::Result<Option<TranslationRecord>> {
            Err(anyhow::anyhow!("disk on fire"))
        }

        async fn find_recent(
            &self,
            _session_id: &str,
            _limit: usize,
        ) -> anyhow::Result<Vec<TranslationRecord>> {
            Err(anyhow::anyhow!("disk on fire"))
        }

        async fn delete(&self, _id: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk on fire"))
        }

        async fn delete_all(&self, _session_id: &str) -> anyhow::Result<usize> {
            Err(anyhow::anyhow!("disk on fire"))
        }
    }

    /// Translator double that always fails, forcing the keyword fallback.
    struct FailingTranslator;

    #[async_trait]
    impl EmotionTranslator for FailingTranslator {
        fn expertise(&self) -> &str {
            "always fails"
        }

        async fn translate(&self, _text: &str) -> Result2<TranslationOutcome> {
            Err(TranslateError::ExecutionFailed(
                "All Gemini models unavailable".to_string(),
            ))
        }
    }

    /// Translator double that returns a fixed outcome.
    struct StaticTranslator(TranslationOutcome);

    #[async_trait]
    impl EmotionTranslator for StaticTranslator {
        fn expertise(&self) -> &str {
            "static"
        }

        async fn translate(&self, _text: &str) -> Result2<TranslationOutcome> {
            Ok(self.0.clone())
        }
    }

    type Result2<T> = std::result::Result<T, TranslateError>;

    fn seeded_strategies() -> Vec<Box<dyn ValidationStrategy>> {
        vec![
            Box::new(ContextualValidationStrategy::with_rng(StdRng::seed_from_u64(1))),
            Box::new(WeightedFallbackStrategy::with_rng(StdRng::seed_from_u64(1))),
        ]
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let service = TranslationService::new(
            Arc::new(InMemoryRepository::default()),
            Arc::new(FailingTranslator),
        );

        let err = service.translate("   ", "default").await.unwrap_err();
        assert!(err.is_invalid_input());

        let err = service.translate("hello", "  ").await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_keyword_translator() {
        let repository = Arc::new(InMemoryRepository::default());
        let service = TranslationService::new(repository.clone(), Arc::new(FailingTranslator))
            .with_strategies(seeded_strategies());

        let record = service
            .translate("I can't stand this anymore, everything feels so overwhelming", "default")
            .await
            .unwrap();

        assert_eq!(record.emotions, vec!["overwhelmed", "stressed"]);
        assert!(!record.clear_expression.is_empty());
        assert!(!record.validation.is_empty());
        assert_eq!(record.session_id, "default");

        // The record was persisted.
        let stored = repository.find_recent("default", 50).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, record.id);
    }

    #[tokio::test]
    async fn test_remote_outcome_with_no_emotions_is_reclassified() {
        let outcome = TranslationOutcome {
            clear_expression: "I feel overlooked".to_string(),
            respectful_expression: "I would appreciate acknowledgment".to_string(),
            emotions: Vec::new(),
        };
        let service = TranslationService::new(
            Arc::new(InMemoryRepository::default()),
            Arc::new(StaticTranslator(outcome)),
        )
        .with_strategies(seeded_strategies());

        let record = service.translate("I feel so ignored", "default").await.unwrap();

        // Labels come from the classifier run on the raw text.
        assert_eq!(record.emotions, vec!["lonely", "unappreciated"]);
    }

    #[tokio::test]
    async fn test_remote_emotions_are_normalized() {
        let outcome = TranslationOutcome {
            clear_expression: "I feel angry".to_string(),
            respectful_expression: "I am upset".to_string(),
            emotions: vec![
                "Angry".to_string(),
                " angry ".to_string(),
                "SAD".to_string(),
            ],
        };
        let service = TranslationService::new(
            Arc::new(InMemoryRepository::default()),
            Arc::new(StaticTranslator(outcome)),
        )
        .with_strategies(seeded_strategies());

        let record = service.translate("whatever", "default").await.unwrap();
        assert_eq!(record.emotions, vec!["angry", "sad"]);
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_block_the_response() {
        let service = TranslationService::new(
            Arc::new(FailingRepository),
            Arc::new(FailingTranslator),
        )
        .with_strategies(seeded_strategies());

        let record = service.translate("I'm so mad", "default").await.unwrap();
        assert_eq!(record.emotions, vec!["angry", "frustrated"]);
        assert!(!record.validation.is_empty());
    }

    #[tokio::test]
    async fn test_empty_strategies_fall_back_to_default_validation() {
        struct EmptyStrategy;
        impl ValidationStrategy for EmptyStrategy {
            fn name(&self) -> &'static str {
                "empty"
            }
            fn generate(&mut self, _draft: &TranslationDraft) -> String {
                String::new()
            }
        }

        let service = TranslationService::new(
            Arc::new(InMemoryRepository::default()),
            Arc::new(FailingTranslator),
        )
        .with_strategies(vec![Box::new(EmptyStrategy)]);

        let record = service.translate("I'm so mad", "default").await.unwrap();
        assert_eq!(record.validation, DEFAULT_VALIDATION);
    }

    #[tokio::test]
    async fn test_history_and_deletion_round_trip() {
        let repository = Arc::new(InMemoryRepository::default());
        let service = TranslationService::new(repository, Arc::new(FailingTranslator))
            .with_strategies(seeded_strategies());

        let first = service.translate("I'm sad", "default").await.unwrap();
        let _second = service.translate("I'm happy", "default").await.unwrap();
        let _other = service.translate("I'm worried", "other").await.unwrap();

        let history = service.history("default").await.unwrap();
        assert_eq!(history.len(), 2);

        service.delete(&first.id).await.unwrap();
        assert_eq!(service.history("default").await.unwrap().len(), 1);

        let removed = service.delete_all("default").await.unwrap();
        assert_eq!(removed, 1);
        assert!(service.history("default").await.unwrap().is_empty());
        assert_eq!(service.history("other").await.unwrap().len(), 1);
    }
}
