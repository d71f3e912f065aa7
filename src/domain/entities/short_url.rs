//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short URL mapping with its lifecycle metadata.
///
/// Created once by the creation service; after that only the redirect path
/// (visit counter and last-access timestamp) or an explicit disable/delete
/// operation may change it.
#[derive(Debug, Clone)]
pub struct ShortUrlRecord {
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

impl ShortUrlRecord {
    /// Returns true if the record has passed its expiry time.
    ///
    /// A record with no expiry never expires.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e < Utc::now())
    }
}

/// Input data for inserting a new record.
///
/// `visit_count` starts at zero and `created_at` is assigned by the store,
/// so neither appears here.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub code: String,
    pub original_url: String,
    pub is_private: bool,
    pub expires_at: Option<DateTime<Utc>>,
}
