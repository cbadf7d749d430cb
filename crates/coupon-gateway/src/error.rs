use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coupon_core::CouponError;
use thiserror::Error;
use tracing::{debug, error};

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures of a coupon route. Signalled by status code only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("coupon not found")]
    NotFound,
    #[error(transparent)]
    Coupon(#[from] CouponError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Coupon(CouponError::Conflict(id)) => {
                debug!(id = %id, "coupon id already taken");
                StatusCode::CONFLICT
            }
            AppError::Coupon(CouponError::Storage(message)) => {
                error!(error = %message, "storage operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
