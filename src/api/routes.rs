//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, disable_url_handler, shorten_handler, url_info_handler, url_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Management API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`              - Create a short URL
/// - `GET    /urls`                 - List all records (newest first)
/// - `GET    /urls/{code}`          - Record details for a code
/// - `PUT    /urls/{code}/disable`  - Disable a short URL
/// - `DELETE /urls/{code}`          - Hard-delete a record
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(url_list_handler))
        .route(
            "/urls/{code}",
            get(url_info_handler).delete(delete_url_handler),
        )
        .route("/urls/{code}/disable", put(disable_url_handler))
}
