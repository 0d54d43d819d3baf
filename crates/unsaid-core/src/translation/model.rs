//! Translation domain models.
//!
//! This module contains the core `TranslationRecord` entity and the
//! in-flight `TranslationDraft` shape consumed by the analyzer and the
//! validation generators.

use crate::validation::ValidationCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An in-flight translation, before validation has been layered on.
///
/// This is the canonical shape the pure core operates on. Alias
/// normalization of legacy payload keys happens once at the remote
/// boundary, never here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationDraft {
    /// Original user input
    pub raw_text: String,
    /// Neutral rephrasing of the input
    pub clear_expression: String,
    /// Non-confrontational rephrasing of the input
    pub respectful_expression: String,
    /// Detected emotion labels, lowercase, in detection order
    pub emotions: Vec<String>,
}

/// A persisted translation.
///
/// A record contains:
/// - The original user input and its two rephrasings
/// - The detected emotion labels (never empty, duplicates removed)
/// - The generated validation sentence (never empty) and its category
/// - A creation timestamp and the owning session
///
/// Records are immutable once created: the only operations are create,
/// read, and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Unique record identifier (UUID format)
    pub id: String,
    /// Original user input
    pub raw_text: String,
    /// Neutral rephrasing
    pub clear_expression: String,
    /// Non-confrontational rephrasing
    pub respectful_expression: String,
    /// Detected emotion labels, lowercase, in detection order
    pub emotions: Vec<String>,
    /// Generated affirming sentence
    pub validation: String,
    /// Category inferred from the validation sentence
    #[serde(default)]
    pub validation_category: ValidationCategory,
    /// Creation timestamp (UTC), set once
    pub timestamp: DateTime<Utc>,
    /// Session this record belongs to
    pub session_id: String,
}

impl TranslationRecord {
    /// Creates a record from a finished draft and its validation sentence.
    ///
    /// The category is derived from the validation text, the id is a fresh
    /// UUID, and the timestamp is the current time.
    pub fn create(
        draft: TranslationDraft,
        validation: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        let validation = validation.into();
        let validation_category = ValidationCategory::of(&validation);

        Self {
            id: Uuid::new_v4().to_string(),
            raw_text: draft.raw_text,
            clear_expression: draft.clear_expression,
            respectful_expression: draft.respectful_expression,
            emotions: draft.emotions,
            validation,
            validation_category,
            timestamp: Utc::now(),
            session_id: session_id.into(),
        }
    }

    /// Display icon for the record's validation category.
    pub fn validation_icon(&self) -> &'static str {
        self.validation_category.icon()
    }

    /// Display color token for the record's validation category.
    pub fn validation_color(&self) -> &'static str {
        self.validation_category.color()
    }
}
