mod common;

use axum::http::{Method, StatusCode};
use common::{broken_router, router, send};
use serde_json::json;

#[tokio::test]
async fn liveness_is_always_ok() {
    let response = send(&broken_router(), Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn readiness_follows_the_store() {
    let ready = send(&router(), Method::GET, "/health/ready", None).await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.json(), json!({ "status": "ok" }));

    let not_ready = send(&broken_router(), Method::GET, "/health/ready", None).await;
    assert_eq!(not_ready.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(not_ready.json(), json!({ "status": "unavailable" }));
}
