//! DTOs for the URL management endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrlRecord;

/// Full record view returned by the info and list endpoints.
#[derive(Debug, Serialize)]
pub struct UrlInfoResponse {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub is_active: bool,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub visit_count: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl From<ShortUrlRecord> for UrlInfoResponse {
    fn from(record: ShortUrlRecord) -> Self {
        Self {
            id: record.id,
            code: record.code,
            original_url: record.original_url,
            is_active: record.is_active,
            is_private: record.is_private,
            created_at: record.created_at,
            expires_at: record.expires_at,
            visit_count: record.visit_count,
            last_accessed_at: record.last_accessed_at,
        }
    }
}

/// Confirmation body for state-changing operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
