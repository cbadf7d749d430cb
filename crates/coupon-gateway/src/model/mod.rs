mod coupon;
mod health;

pub use coupon::{CouponRequest, CouponResponse};
pub use health::HealthResponse;
