use axum::Json;
use axum::extract::{Extension, State};
use coachdesk_core::AccessToken;
use coachdesk_domain::NotificationFeed;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn notifications_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<NotificationFeed>> {
    let feed = state.notification_service.feed(&token).await?;
    Ok(Json(feed))
}
