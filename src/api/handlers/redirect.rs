//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::application::services::RedirectResult;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Successful resolutions answer 307 Temporary Redirect and count the visit.
/// Unknown codes answer 404; disabled and expired links answer 400 with the
/// reason in the JSON error body, without touching the counter.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.redirect_engine.resolve(&code).await? {
        RedirectResult::Found(original_url) => Ok(Redirect::temporary(&original_url)),
        RedirectResult::NotFound => Err(AppError::not_found(
            "Short code not found",
            json!({ "code": code }),
        )),
        RedirectResult::Disabled => Err(AppError::state(
            "This short URL is disabled",
            json!({ "code": code, "reason": "disabled" }),
        )),
        RedirectResult::Expired => Err(AppError::state(
            "This short URL has expired",
            json!({ "code": code, "reason": "expired" }),
        )),
    }
}
