use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use coachdesk_application::EventListing;
use coachdesk_core::AccessToken;
use coachdesk_domain::{Event, EventStats, Page, RecordId};

use super::coalescer_key;
use crate::dto::ListQueryRequest;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_events_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<ListQueryRequest>,
) -> ApiResult<Json<Page<EventListing>>> {
    let query = params.to_list_query()?;
    let near = params.near_point()?;
    let page = state
        .search_coalescer
        .run(
            &coalescer_key(&token, "events"),
            params.has_search(),
            || state.event_service.list_events(&token, &query, near),
        )
        .await?;

    Ok(Json(page))
}

pub async fn event_stats_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<EventStats>> {
    let stats = state.event_service.event_stats(&token).await?;
    Ok(Json(stats))
}

pub async fn get_event_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<Event>> {
    let event = state
        .event_service
        .get_event(&token, &RecordId::new(event_id))
        .await?;
    Ok(Json(event))
}

pub async fn create_event_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<Event>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let event = state.event_service.create_event(&token, payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(event_id): Path<String>,
    Json(payload): Json<Event>,
) -> ApiResult<Json<Event>> {
    let event = state
        .event_service
        .update_event(&token, &RecordId::new(event_id), payload)
        .await?;
    Ok(Json(event))
}

pub async fn delete_event_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(event_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .event_service
        .delete_event(&token, &RecordId::new(event_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
