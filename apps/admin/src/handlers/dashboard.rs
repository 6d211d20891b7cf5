use axum::Json;
use axum::extract::{Extension, Query, State};
use coachdesk_core::AccessToken;
use coachdesk_domain::{DashboardSnapshot, RevenuePoint};

use crate::dto::RevenueChartQueryRequest;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<DashboardSnapshot>> {
    let snapshot = state.dashboard_service.snapshot(&token).await?;
    Ok(Json(snapshot))
}

pub async fn revenue_chart_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<RevenueChartQueryRequest>,
) -> ApiResult<Json<Vec<RevenuePoint>>> {
    let points = state
        .dashboard_service
        .revenue_chart(&token, params.period.as_deref())
        .await?;
    Ok(Json(points))
}
