//! Translation repository trait.
//!
//! Defines the interface for translation record persistence operations.

use super::model::TranslationRecord;
use anyhow::Result;
use async_trait::async_trait;

/// An abstract repository for managing translation record persistence.
///
/// This trait defines the contract for persisting and retrieving records,
/// decoupling the application's core logic from the specific storage
/// mechanism (e.g., TOML files, database, remote API).
///
/// Records are immutable: there is no update operation, only create,
/// read, and delete.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Saves a record to storage.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Record saved successfully
    /// - `Err(_)`: Error occurred during save
    async fn save(&self, record: &TranslationRecord) -> Result<()>;

    /// Finds a record by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(TranslationRecord))`: Record found
    /// - `Ok(None)`: Record not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, id: &str) -> Result<Option<TranslationRecord>>;

    /// Lists a session's records in reverse-chronological order, capped
    /// at `limit`.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<TranslationRecord>)`: Newest-first records for the session
    /// - `Err(_)`: Error occurred during listing
    async fn find_recent(&self, session_id: &str, limit: usize) -> Result<Vec<TranslationRecord>>;

    /// Deletes a record from storage.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Record deleted successfully (or didn't exist)
    /// - `Err(_)`: Error occurred during deletion
    async fn delete(&self, id: &str) -> Result<()>;

    /// Deletes all records belonging to a session.
    ///
    /// # Returns
    ///
    /// - `Ok(usize)`: Number of records removed
    /// - `Err(_)`: Error occurred during deletion
    async fn delete_all(&self, session_id: &str) -> Result<usize>;
}
