#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use coupon_core::{
    Coupon, CouponDraft, CouponError, CouponId, CouponManager, CouponService, InMemoryRepository,
    SeqGenerator,
};
use coupon_gateway::{App, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Router over an empty in-memory store whose generated ids are
/// `cp000000`, `cp000001`, ...
pub fn router() -> Router {
    let service = CouponService::new(InMemoryRepository::new(), SeqGenerator::with_prefix("cp"));
    App::router(AppState::new(Arc::new(service)))
}

/// Router whose store fails every call.
pub fn broken_router() -> Router {
    App::router(AppState::new(Arc::new(BrokenStore)))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is json")
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        location,
        body,
    }
}

struct BrokenStore;

fn unavailable() -> CouponError {
    CouponError::Storage("storage backend unavailable: connection refused".to_string())
}

#[async_trait]
impl CouponManager for BrokenStore {
    async fn list(&self) -> Result<Vec<Coupon>, CouponError> {
        Err(unavailable())
    }

    async fn get(&self, _id: &CouponId) -> Result<Option<Coupon>, CouponError> {
        Err(unavailable())
    }

    async fn create(&self, _draft: CouponDraft) -> Result<Coupon, CouponError> {
        Err(unavailable())
    }

    async fn replace(&self, _id: &CouponId, _draft: CouponDraft) -> Result<bool, CouponError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &CouponId) -> Result<bool, CouponError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), CouponError> {
        Err(unavailable())
    }
}
