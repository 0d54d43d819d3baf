//! TOML-based TranslationRepository implementation

use crate::dto::TranslationRecordV1;
use crate::paths::UnsaidPaths;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use unsaid_core::translation::{TranslationRecord, TranslationRepository};

/// A repository implementation for storing translation records in TOML
/// files, one file per record.
///
/// Directory structure:
/// ```text
/// base_dir/
/// └── translations/
///     ├── <record-id-1>.toml
///     └── <record-id-2>.toml
/// ```
///
/// Unreadable record files are skipped (with a warning) during listing so
/// one corrupt file cannot take the whole history down.
pub struct TomlTranslationRepository {
    base_dir: PathBuf,
}

impl TomlTranslationRepository {
    /// Creates a new `TomlTranslationRepository` with the specified base
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory structure cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let translations_dir = base_dir.join("translations");
        fs::create_dir_all(&translations_dir)
            .context("Failed to create translations directory")?;

        Ok(Self { base_dir })
    }

    /// Creates a `TomlTranslationRepository` instance at the default
    /// location (`~/.config/unsaid`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be
    /// determined or if the directory structure cannot be created.
    pub fn default_location() -> Result<Self> {
        let base_dir = UnsaidPaths::config_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get config directory: {}", e))?;
        Self::new(base_dir)
    }

    /// Returns the file path for a given record ID.
    fn record_file_path(&self, id: &str) -> PathBuf {
        self.base_dir
            .join("translations")
            .join(format!("{}.toml", id))
    }

    /// Loads a record from a specific file path.
    fn load_record_from_path(&self, path: &Path) -> Result<TranslationRecord> {
        let toml_content = fs::read_to_string(path)
            .context(format!("Failed to read translation file: {:?}", path))?;

        let dto: TranslationRecordV1 = toml::from_str(&toml_content)
            .context(format!("Failed to parse translation file: {:?}", path))?;

        Ok(dto.into())
    }

    /// Loads every readable record; unreadable files are skipped with a
    /// warning.
    fn load_all(&self) -> Result<Vec<TranslationRecord>> {
        let translations_dir = self.base_dir.join("translations");
        let entries = fs::read_dir(&translations_dir)
            .context("Failed to read translations directory")?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }

            match self.load_record_from_path(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping unreadable translation file {:?}: {}", path, e);
                }
            }
        }

        Ok(records)
    }
}

#[async_trait]
impl TranslationRepository for TomlTranslationRepository {
    async fn save(&self, record: &TranslationRecord) -> Result<()> {
        let file_path = self.record_file_path(&record.id);

        let dto = TranslationRecordV1::from(record);
        let toml_content = toml::to_string_pretty(&dto)
            .context("Failed to serialize translation record to TOML")?;

        fs::write(&file_path, toml_content)
            .context(format!("Failed to write translation file: {:?}", file_path))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TranslationRecord>> {
        let file_path = self.record_file_path(id);

        if !file_path.exists() {
            return Ok(None);
        }

        self.load_record_from_path(&file_path).map(Some)
    }

    async fn find_recent(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<TranslationRecord>> {
        let mut records: Vec<TranslationRecord> = self
            .load_all()?
            .into_iter()
            .filter(|record| record.session_id == session_id)
            .collect();

        // Newest first.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);

        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let file_path = self.record_file_path(id);

        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&file_path)
            .context(format!("Failed to delete translation file: {:?}", file_path))?;

        Ok(())
    }

    async fn delete_all(&self, session_id: &str) -> Result<usize> {
        let mut removed = 0;
        for record in self.load_all()? {
            if record.session_id != session_id {
                continue;
            }

            let file_path = self.record_file_path(&record.id);
            fs::remove_file(&file_path)
                .context(format!("Failed to delete translation file: {:?}", file_path))?;
            removed += 1;
        }

        Ok(removed)
    }
}
