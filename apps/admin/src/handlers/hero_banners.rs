use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use coachdesk_core::AccessToken;
use coachdesk_domain::{LayerPatch, RecordId, Slide};

use crate::dto::{CreateLayerRequest, MoveRequest, ReorderSlidesRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_slides_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<Vec<Slide>>> {
    let slides = state.hero_banner_service.list_slides(&token).await?;
    Ok(Json(slides))
}

pub async fn create_slide_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<Slide>,
) -> ApiResult<(StatusCode, Json<Slide>)> {
    let slide = state
        .hero_banner_service
        .create_slide(&token, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

pub async fn update_slide_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(slide_id): Path<String>,
    Json(payload): Json<Slide>,
) -> ApiResult<Json<Slide>> {
    let slide = state
        .hero_banner_service
        .update_slide(&token, &RecordId::new(slide_id), payload)
        .await?;
    Ok(Json(slide))
}

pub async fn delete_slide_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(slide_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .hero_banner_service
        .delete_slide(&token, &RecordId::new(slide_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clone_slide_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(slide_id): Path<String>,
) -> ApiResult<(StatusCode, Json<Slide>)> {
    let slide = state
        .hero_banner_service
        .clone_slide(&token, &RecordId::new(slide_id))
        .await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

pub async fn reorder_slides_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<ReorderSlidesRequest>,
) -> ApiResult<Json<Vec<Slide>>> {
    let slides = state
        .hero_banner_service
        .reorder_slides(&token, &payload.record_ids())
        .await?;
    Ok(Json(slides))
}

pub async fn move_slide_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(slide_id): Path<String>,
    Json(payload): Json<MoveRequest>,
) -> ApiResult<Json<Vec<Slide>>> {
    let slides = state
        .hero_banner_service
        .move_slide(&token, &RecordId::new(slide_id), payload.move_direction()?)
        .await?;
    Ok(Json(slides))
}

pub async fn add_layer_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(slide_id): Path<String>,
    Json(payload): Json<CreateLayerRequest>,
) -> ApiResult<(StatusCode, Json<Slide>)> {
    let slide = state
        .hero_banner_service
        .add_layer(&token, &RecordId::new(slide_id), payload.into_new_layer()?)
        .await?;
    Ok((StatusCode::CREATED, Json(slide)))
}

pub async fn update_layer_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path((slide_id, layer_id)): Path<(String, String)>,
    Json(payload): Json<LayerPatch>,
) -> ApiResult<Json<Slide>> {
    let slide = state
        .hero_banner_service
        .update_layer(&token, &RecordId::new(slide_id), &layer_id, payload)
        .await?;
    Ok(Json(slide))
}

pub async fn remove_layer_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path((slide_id, layer_id)): Path<(String, String)>,
) -> ApiResult<Json<Slide>> {
    let slide = state
        .hero_banner_service
        .remove_layer(&token, &RecordId::new(slide_id), &layer_id)
        .await?;
    Ok(Json(slide))
}

pub async fn move_layer_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path((slide_id, layer_id)): Path<(String, String)>,
    Json(payload): Json<MoveRequest>,
) -> ApiResult<Json<Slide>> {
    let slide = state
        .hero_banner_service
        .move_layer(
            &token,
            &RecordId::new(slide_id),
            &layer_id,
            payload.move_direction()?,
        )
        .await?;
    Ok(Json(slide))
}
