//! Persistence DTOs for translation records.
//!
//! Storage uses versioned DTOs so the on-disk format can evolve
//! independently of the domain model. V1 is the only version so far; the
//! `schema_version` field is what a future migrator will dispatch on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unsaid_core::translation::TranslationRecord;
use unsaid_core::validation::ValidationCategory;

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

/// On-disk shape of a translation record (schema V1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecordV1 {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub id: String,
    pub raw_text: String,
    pub clear_expression: String,
    pub respectful_expression: String,
    pub emotions: Vec<String>,
    pub validation: String,
    #[serde(default)]
    pub validation_category: ValidationCategory,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
}

impl From<&TranslationRecord> for TranslationRecordV1 {
    fn from(record: &TranslationRecord) -> Self {
        Self {
            schema_version: default_schema_version(),
            id: record.id.clone(),
            raw_text: record.raw_text.clone(),
            clear_expression: record.clear_expression.clone(),
            respectful_expression: record.respectful_expression.clone(),
            emotions: record.emotions.clone(),
            validation: record.validation.clone(),
            validation_category: record.validation_category,
            timestamp: record.timestamp,
            session_id: record.session_id.clone(),
        }
    }
}

impl From<TranslationRecordV1> for TranslationRecord {
    fn from(dto: TranslationRecordV1) -> Self {
        Self {
            id: dto.id,
            raw_text: dto.raw_text,
            clear_expression: dto.clear_expression,
            respectful_expression: dto.respectful_expression,
            emotions: dto.emotions,
            validation: dto.validation,
            validation_category: dto.validation_category,
            timestamp: dto.timestamp,
            session_id: dto.session_id,
        }
    }
}
