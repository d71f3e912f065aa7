//! Short URL creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::application::services::uniqueness::UniquenessResolver;
use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_normalizer::normalize_url;

/// Outcome of a creation request.
///
/// `newly_created` distinguishes a fresh insert from an idempotent hit on an
/// existing record, so the API layer can answer 201 vs 200.
#[derive(Debug, Clone)]
pub struct CreationOutcome {
    pub record: ShortUrlRecord,
    pub newly_created: bool,
}

/// Service orchestrating URL validation, dedupe, code allocation, and insert.
pub struct CreationService {
    store: Arc<dyn RecordStore>,
    generator: CodeGenerator,
    resolver: UniquenessResolver,
}

impl CreationService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        generator: CodeGenerator,
        resolver: UniquenessResolver,
    ) -> Self {
        Self {
            store,
            generator,
            resolver,
        }
    }

    /// Creates a short URL record, or returns the existing active one.
    ///
    /// # Deduplication
    ///
    /// Creation is idempotent per normalized URL: if an active record already
    /// maps the same URL, it is returned unchanged.
    ///
    /// # Races
    ///
    /// Two concurrent creations of the same URL can both pass the dedupe
    /// check; the store's uniqueness constraints decide the winner. A
    /// [`AppError::Conflict`] from the insert therefore means someone else
    /// won, and the loser re-fetches the winning record instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed/non-absolute URL or
    /// an expiry in the past, [`AppError::Capacity`] when code allocation
    /// exhausts its attempts.
    pub async fn create(
        &self,
        original_url: &str,
        is_private: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<CreationOutcome, AppError> {
        let normalized_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(expiry) = expires_at {
            if expiry < Utc::now() {
                return Err(AppError::bad_request(
                    "Expiry must not be in the past",
                    json!({ "expires_at": expiry }),
                ));
            }
        }

        if let Some(existing) = self
            .store
            .find_active_by_original_url(&normalized_url)
            .await?
        {
            return Ok(CreationOutcome {
                record: existing,
                newly_created: false,
            });
        }

        // Insert conflicts are expected under concurrency: either the same
        // URL was inserted by a concurrent request (re-fetch the winner), or
        // the allocated code was taken between check and insert (retry once).
        let mut last_conflict = None;

        for _ in 0..2 {
            let code = self
                .resolver
                .allocate(self.store.as_ref(), || {
                    self.generator.generate(Some(&normalized_url))
                })
                .await?;

            let new_record = NewShortUrl {
                code,
                original_url: normalized_url.clone(),
                is_private,
                expires_at,
            };

            match self.store.insert(new_record).await {
                Ok(record) => {
                    tracing::info!(code = %record.code, "short url created");
                    return Ok(CreationOutcome {
                        record,
                        newly_created: true,
                    });
                }
                Err(conflict @ AppError::Conflict { .. }) => {
                    if let Some(winner) = self
                        .store
                        .find_active_by_original_url(&normalized_url)
                        .await?
                    {
                        return Ok(CreationOutcome {
                            record: winner,
                            newly_created: false,
                        });
                    }
                    last_conflict = Some(conflict);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_conflict.unwrap_or_else(|| {
            AppError::internal("Short url creation failed", json!({}))
        }))
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn get_record(&self, code: &str) -> Result<ShortUrlRecord, AppError> {
        self.store.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })
    }
}
