use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use coachdesk_application::CouponListing;
use coachdesk_core::AccessToken;
use coachdesk_domain::{Coupon, CouponAnalytics, CouponStats, Page, RecordId};

use super::coalescer_key;
use crate::dto::{AnalyticsQueryRequest, ListQueryRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_coupons_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<ListQueryRequest>,
) -> ApiResult<Json<Page<CouponListing>>> {
    let query = params.to_list_query()?;
    let page = state
        .search_coalescer
        .run(
            &coalescer_key(&token, "coupons"),
            params.has_search(),
            || state.coupon_service.list_coupons(&token, &query),
        )
        .await?;

    Ok(Json(page))
}

pub async fn coupon_stats_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<CouponStats>> {
    let stats = state.coupon_service.coupon_stats(&token).await?;
    Ok(Json(stats))
}

pub async fn coupon_analytics_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<AnalyticsQueryRequest>,
) -> ApiResult<Json<CouponAnalytics>> {
    let analytics = state
        .coupon_service
        .coupon_analytics(&token, params.analytics_range()?)
        .await?;
    Ok(Json(analytics))
}

pub async fn get_coupon_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(coupon_id): Path<String>,
) -> ApiResult<Json<Coupon>> {
    let coupon = state
        .coupon_service
        .get_coupon(&token, &RecordId::new(coupon_id))
        .await?;
    Ok(Json(coupon))
}

pub async fn create_coupon_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<Coupon>,
) -> ApiResult<(StatusCode, Json<Coupon>)> {
    let coupon = state.coupon_service.create_coupon(&token, payload).await?;
    Ok((StatusCode::CREATED, Json(coupon)))
}

pub async fn update_coupon_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(coupon_id): Path<String>,
    Json(payload): Json<Coupon>,
) -> ApiResult<Json<Coupon>> {
    let coupon = state
        .coupon_service
        .update_coupon(&token, &RecordId::new(coupon_id), payload)
        .await?;
    Ok(Json(coupon))
}

pub async fn delete_coupon_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(coupon_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .coupon_service
        .delete_coupon(&token, &RecordId::new(coupon_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
