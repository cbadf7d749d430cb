//! HTTP gateway for the coupon service.
//!
//! Exposes the coupon collection as a JSON resource under `/coupons`
//! together with liveness and readiness probes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
