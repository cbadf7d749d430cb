use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_coupon_handler, delete_coupon_handler, get_coupon_handler, health_handler,
    list_coupons_handler, openapi_handler, readiness_handler, replace_coupon_handler,
    OPENAPI_PATH,
};
use crate::state::AppState;

/// Base path of the coupon resource.
pub const COUPONS_PATH: &str = "/coupons";

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/health/ready", get(readiness_handler))
            .route(OPENAPI_PATH, get(openapi_handler))
            // The collection answers with and without a trailing slash.
            .route(
                "/coupons",
                get(list_coupons_handler).post(create_coupon_handler),
            )
            .route(
                "/coupons/",
                get(list_coupons_handler).post(create_coupon_handler),
            )
            .route(
                "/coupons/{id}",
                get(get_coupon_handler)
                    .put(replace_coupon_handler)
                    .delete(delete_coupon_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
