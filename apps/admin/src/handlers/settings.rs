use axum::Json;
use axum::extract::{Extension, Path, State};
use coachdesk_core::AccessToken;
use coachdesk_domain::CouponSettings;
use serde_json::Value;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn coupon_settings_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<CouponSettings>> {
    let settings = state.coupon_service.coupon_settings(&token).await?;
    Ok(Json(settings))
}

pub async fn save_coupon_settings_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<CouponSettings>,
) -> ApiResult<Json<CouponSettings>> {
    let settings = state
        .coupon_service
        .save_coupon_settings(&token, payload)
        .await?;
    Ok(Json(settings))
}

pub async fn save_settings_section_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(section): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Value>> {
    let saved = state
        .settings_service
        .save_section(&token, &section, payload)
        .await?;
    Ok(Json(saved))
}
