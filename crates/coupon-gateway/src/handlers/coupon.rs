use crate::app::COUPONS_PATH;
use crate::error::{AppError, Result};
use crate::model::{CouponRequest, CouponResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use coupon_core::{CouponId, CouponManager};

pub async fn list_coupons_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CouponResponse>>> {
    let coupons = state.coupons().list().await?;
    Ok(Json(coupons.into_iter().map(CouponResponse::from).collect()))
}

pub async fn get_coupon_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CouponResponse>> {
    let id = CouponId::new_unchecked(id);
    let coupon = state.coupons().get(&id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(coupon.into()))
}

pub async fn create_coupon_handler(
    State(state): State<AppState>,
    Json(request): Json<CouponRequest>,
) -> Result<Response> {
    let coupon = state.coupons().create(request.into_draft()).await?;
    let location = coupon.id.location(COUPONS_PATH);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CouponResponse::from(coupon)),
    )
        .into_response())
}

/// Full replace: fields missing from the body are not carried over.
pub async fn replace_coupon_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<CouponRequest>,
) -> Result<StatusCode> {
    let id = CouponId::new_unchecked(id);

    if state.coupons().replace(&id, request.into_draft()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

pub async fn delete_coupon_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let id = CouponId::new_unchecked(id);

    if state.coupons().delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
