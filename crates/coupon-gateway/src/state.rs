use std::sync::Arc;

use coupon_core::CouponManager;

#[derive(Clone)]
pub struct AppState {
    coupons: Arc<dyn CouponManager>,
}

impl AppState {
    pub fn new(coupons: Arc<dyn CouponManager>) -> Self {
        Self { coupons }
    }

    pub fn coupons(&self) -> &dyn CouponManager {
        self.coupons.as_ref()
    }
}
