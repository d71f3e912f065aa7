//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Marks the record as private. Stored metadata only.
    #[serde(default)]
    pub is_private: bool,

    /// Optional expiry timestamp; the link stops redirecting after it.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response for a created (or deduplicated) short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
