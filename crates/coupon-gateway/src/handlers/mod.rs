mod coupon;
mod health;
mod openapi;

pub use coupon::{
    create_coupon_handler, delete_coupon_handler, get_coupon_handler, list_coupons_handler,
    replace_coupon_handler,
};
pub use health::{health_handler, readiness_handler};
pub use openapi::{openapi_handler, OPENAPI_PATH};
