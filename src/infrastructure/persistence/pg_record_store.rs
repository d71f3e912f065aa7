//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// Row shape returned by the `short_urls` queries.
///
/// Kept separate from the domain entity so rows are populated by named-field
/// extraction rather than positional binding.
#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    code: String,
    original_url: String,
    is_active: bool,
    is_private: bool,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    visit_count: i64,
    last_accessed_at: Option<DateTime<Utc>>,
}

impl From<ShortUrlRow> for ShortUrlRecord {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrlRecord {
            id: row.id,
            code: row.code,
            original_url: row.original_url,
            is_active: row.is_active,
            is_private: row.is_private,
            created_at: row.created_at,
            expires_at: row.expires_at,
            visit_count: row.visit_count,
            last_accessed_at: row.last_accessed_at,
        }
    }
}

const RECORD_COLUMNS: &str = "id, code, original_url, is_active, is_private, \
                              created_at, expires_at, visit_count, last_accessed_at";

/// PostgreSQL store for short URL records.
///
/// Uniqueness is enforced by the schema: a global unique constraint on `code`
/// and a partial unique index on `original_url` over active rows. Both
/// surface as [`AppError::Conflict`].
pub struct PgRecordStore {
    pool: Arc<PgPool>,
}

impl PgRecordStore {
    /// Creates a new store backed by a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let row: Option<ShortUrlRow> = sqlx::query_as(&format!(
            "SELECT {RECORD_COLUMNS} FROM short_urls WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrlRecord::from))
    }

    async fn find_active_by_original_url(
        &self,
        url: &str,
    ) -> Result<Option<ShortUrlRecord>, AppError> {
        let row: Option<ShortUrlRow> = sqlx::query_as(&format!(
            "SELECT {RECORD_COLUMNS} FROM short_urls WHERE original_url = $1 AND is_active"
        ))
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrlRecord::from))
    }

    async fn insert(&self, new_record: NewShortUrl) -> Result<ShortUrlRecord, AppError> {
        let row: ShortUrlRow = sqlx::query_as(&format!(
            "INSERT INTO short_urls (code, original_url, is_private, expires_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&new_record.code)
        .bind(&new_record.original_url)
        .bind(new_record.is_private)
        .bind(new_record.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn increment_visit(&self, code: &str) -> Result<bool, AppError> {
        // Relative update: the counter math happens inside the store, so
        // concurrent redirects never clobber each other with stale reads.
        let result = sqlx::query(
            "UPDATE short_urls \
             SET visit_count = visit_count + 1, last_accessed_at = now() \
             WHERE code = $1",
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_active(&self, code: &str, active: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE short_urls SET is_active = $2 WHERE code = $1")
            .bind(code)
            .bind(active)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<ShortUrlRecord>, AppError> {
        let rows: Vec<ShortUrlRow> = sqlx::query_as(&format!(
            "SELECT {RECORD_COLUMNS} FROM short_urls ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrlRecord::from).collect())
    }
}
