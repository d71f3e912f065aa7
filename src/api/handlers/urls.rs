//! Handlers for URL record management: info, listing, disable, delete.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::url_info::{MessageResponse, UrlInfoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full record for a short code.
///
/// # Endpoint
///
/// `GET /api/urls/{code}`
pub async fn url_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let record = state.creation_service.get_record(&code).await?;

    Ok(Json(UrlInfoResponse::from(record)))
}

/// Lists all records, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn url_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlInfoResponse>>, AppError> {
    let records = state.store.list_all().await?;

    Ok(Json(records.into_iter().map(UrlInfoResponse::from).collect()))
}

/// Disables a short URL so it stops redirecting.
///
/// # Endpoint
///
/// `PUT /api/urls/{code}/disable`
///
/// Disabling keeps the row (and its code) around; the redirect path answers
/// 400 for it from now on. Idempotent on already-disabled records.
pub async fn disable_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.set_active(&code, false).await? {
        return Err(AppError::not_found(
            "Short code not found",
            json!({ "code": code }),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Short URL disabled",
    }))
}

/// Permanently deletes a short URL record.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
pub async fn delete_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(&code).await? {
        return Err(AppError::not_found(
            "Short code not found",
            json!({ "code": code }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
