//! Redirect resolution: code lookup, state checks, visit counting.

use std::sync::Arc;

use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// Outcome of resolving a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectResult {
    /// Active, non-expired record; carries the destination URL.
    Found(String),
    NotFound,
    /// Record exists but has been disabled.
    Disabled,
    /// Record exists but its expiry has passed.
    Expired,
}

/// Resolves short codes to their destination URLs.
///
/// State machine per lookup: unknown code, disabled, expired, or found. Only
/// a successful resolution mutates the record, and then exactly once, via the
/// store's relative increment. Disabled and expired lookups leave the counter
/// untouched.
pub struct RedirectEngine {
    store: Arc<dyn RecordStore>,
}

impl RedirectEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Resolves a code, applying active/expiry checks and counting the visit.
    ///
    /// The increment is expressed relative at the store boundary, so
    /// concurrent resolutions of the same code never lose updates. If the
    /// record disappears between the lookup and the increment, the result
    /// degrades to [`RedirectResult::NotFound`] rather than redirecting
    /// without counting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<RedirectResult, AppError> {
        let record = match self.store.find_by_code(code).await? {
            Some(record) => record,
            None => return Ok(RedirectResult::NotFound),
        };

        if !record.is_active {
            tracing::debug!(code, "redirect refused: disabled");
            return Ok(RedirectResult::Disabled);
        }

        if record.is_expired() {
            tracing::debug!(code, "redirect refused: expired");
            return Ok(RedirectResult::Expired);
        }

        if !self.store.increment_visit(code).await? {
            return Ok(RedirectResult::NotFound);
        }

        Ok(RedirectResult::Found(record.original_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortUrlRecord;
    use crate::domain::repositories::MockRecordStore;
    use chrono::{Duration, Utc};

    fn record(code: &str, is_active: bool, expires_at: Option<chrono::DateTime<Utc>>) -> ShortUrlRecord {
        ShortUrlRecord {
            id: 1,
            code: code.to_string(),
            original_url: "https://example.com/target".to_string(),
            is_active,
            is_private: false,
            created_at: Utc::now(),
            expires_at,
            visit_count: 3,
            last_accessed_at: None,
        }
    }

    #[tokio::test]
    async fn test_resolve_active_record_counts_visit() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(record(code, true, None))));
        store
            .expect_increment_visit()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        let engine = RedirectEngine::new(Arc::new(store));

        let result = engine.resolve("abc123").await.unwrap();
        assert_eq!(
            result,
            RedirectResult::Found("https://example.com/target".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut store = MockRecordStore::new();
        store.expect_find_by_code().times(1).returning(|_| Ok(None));
        store.expect_increment_visit().times(0);

        let engine = RedirectEngine::new(Arc::new(store));

        assert_eq!(engine.resolve("nope").await.unwrap(), RedirectResult::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_disabled_record_skips_counter() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(record(code, false, None))));
        store.expect_increment_visit().times(0);

        let engine = RedirectEngine::new(Arc::new(store));

        assert_eq!(engine.resolve("off").await.unwrap(), RedirectResult::Disabled);
    }

    #[tokio::test]
    async fn test_resolve_expired_record_skips_counter() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(record(code, true, Some(Utc::now() - Duration::hours(1))))));
        store.expect_increment_visit().times(0);

        let engine = RedirectEngine::new(Arc::new(store));

        assert_eq!(engine.resolve("old").await.unwrap(), RedirectResult::Expired);
    }

    #[tokio::test]
    async fn test_resolve_disabled_wins_over_expired() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(record(code, false, Some(Utc::now() - Duration::hours(1))))));
        store.expect_increment_visit().times(0);

        let engine = RedirectEngine::new(Arc::new(store));

        assert_eq!(engine.resolve("both").await.unwrap(), RedirectResult::Disabled);
    }

    #[tokio::test]
    async fn test_resolve_record_deleted_mid_flight() {
        let mut store = MockRecordStore::new();
        store
            .expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(record(code, true, None))));
        // A concurrent delete removed the row before the increment landed.
        store
            .expect_increment_visit()
            .times(1)
            .returning(|_| Ok(false));

        let engine = RedirectEngine::new(Arc::new(store));

        assert_eq!(engine.resolve("gone").await.unwrap(), RedirectResult::NotFound);
    }
}
