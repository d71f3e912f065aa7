//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports service liveness and a store round trip.
///
/// # Endpoint
///
/// `GET /health`
///
/// Answers 200 with `"status": "ok"` when the store responds, 503 otherwise.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.store.find_by_code("__health__").await {
        Ok(_) => CheckStatus::Ok,
        Err(e) => {
            tracing::error!(error = %e, "health check: store unreachable");
            CheckStatus::Failed
        }
    };

    let (status, label) = if database == CheckStatus::Ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            checks: HealthChecks { database },
        }),
    )
}
