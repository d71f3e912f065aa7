mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use tinylink::api::handlers::redirect_handler;

fn test_server() -> (TestServer, std::sync::Arc<common::MemoryStore>) {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, store) = test_server();
    store.seed("target", "https://example.com/target", true, None);

    let response = server.get("/target").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_each_visit() {
    let (server, store) = test_server();
    store.seed("hot", "https://example.com", true, None);

    for _ in 0..5 {
        let response = server.get("/hot").await;
        assert_eq!(response.status_code(), 307);
    }

    assert_eq!(store.visit_count("hot"), Some(5));
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = test_server();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_disabled_link() {
    let (server, store) = test_server();
    store.seed("off", "https://example.com", false, None);

    let response = server.get("/off").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "state_error");
    assert_eq!(body["error"]["details"]["reason"], "disabled");

    assert_eq!(store.visit_count("off"), Some(0));
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let (server, store) = test_server();
    store.seed(
        "old",
        "https://example.com",
        true,
        Some(Utc::now() - Duration::hours(1)),
    );

    let response = server.get("/old").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["details"]["reason"], "expired");

    assert_eq!(store.visit_count("old"), Some(0));
}

#[tokio::test]
async fn test_redirect_future_expiry_still_works() {
    let (server, store) = test_server();
    store.seed(
        "fresh",
        "https://example.com",
        true,
        Some(Utc::now() + Duration::hours(1)),
    );

    let response = server.get("/fresh").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(store.visit_count("fresh"), Some(1));
}
