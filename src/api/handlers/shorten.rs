//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Idempotency
///
/// Shortening a URL that already has an active record returns that record
/// with 200 OK; a fresh record answers 201 Created.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty, relative, or non-HTTP(S) URL, or an
/// expiry in the past. Returns 500 when the code space is exhausted.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .creation_service
        .create(&payload.url, payload.is_private, payload.expires_at)
        .await?;

    let status = if outcome.newly_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let record = outcome.record;
    let short_url = state.short_url(&record.code);

    Ok((
        status,
        Json(ShortenResponse {
            code: record.code,
            short_url,
            original_url: record.original_url,
            expires_at: record.expires_at,
        }),
    ))
}
