//! Persistence contract for short URL records.

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Narrow persistence interface consumed by the services.
///
/// The store is the single piece of shared state across concurrent requests;
/// all uniqueness guarantees (code, active original URL) live behind this
/// boundary, as does the relative visit-count increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Finds a record by its short code, regardless of active state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Finds the active record for a normalized original URL, if any.
    ///
    /// Backs idempotent creation: disabled records do not match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active_by_original_url(
        &self,
        url: &str,
    ) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Inserts a new record and returns it with store-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code or the active original URL
    /// collides with an existing row, [`AppError::Internal`] on other
    /// database errors.
    async fn insert(&self, new_record: NewShortUrl) -> Result<ShortUrlRecord, AppError>;

    /// Atomically increments the visit counter and stamps the last access
    /// time, as a single relative update at the store.
    ///
    /// Returns whether a row was affected. `false` means the code vanished
    /// between the caller's read and this write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_visit(&self, code: &str) -> Result<bool, AppError>;

    /// Sets the active flag on a record.
    ///
    /// Returns `false` if no record matches the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_active(&self, code: &str, active: bool) -> Result<bool, AppError>;

    /// Hard-deletes a record.
    ///
    /// Returns `false` if no record matches the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<ShortUrlRecord>, AppError>;
}
