//! Collision-free short code allocation.

use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use serde_json::json;

/// Allocates codes that are not yet assigned in the store.
///
/// Retries generation on collision up to a configured bound. An unbounded
/// retry loop would be a liveness hazard once the code space saturates, so
/// exhaustion is a terminal [`AppError::Capacity`] for the request.
#[derive(Clone)]
pub struct UniquenessResolver {
    max_attempts: u32,
}

impl UniquenessResolver {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Produces a code that no record currently uses.
    ///
    /// `generate` is called once per attempt; existence is checked through
    /// the store. No side effects beyond the read-only lookups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Capacity`] when `max_attempts` candidates all
    /// collided, [`AppError::Internal`] on store errors.
    pub async fn allocate<G>(
        &self,
        store: &dyn RecordStore,
        mut generate: G,
    ) -> Result<String, AppError>
    where
        G: FnMut() -> String + Send,
    {
        for attempt in 0..self.max_attempts {
            let candidate = generate();

            if store.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            tracing::warn!(attempt, code = %candidate, "short code collision, retrying");
        }

        Err(AppError::capacity(
            "Failed to allocate a unique short code",
            json!({ "attempts": self.max_attempts }),
        ))
    }
}
