use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use coachdesk_core::AccessToken;
use coachdesk_domain::{Category, RecordId};

use super::coalescer_key;
use crate::dto::ListQueryRequest;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_categories_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<ListQueryRequest>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state
        .search_coalescer
        .run(
            &coalescer_key(&token, "categories"),
            params.has_search(),
            || {
                state
                    .content_service
                    .list_categories(&token, params.search.as_deref())
            },
        )
        .await?;

    Ok(Json(categories))
}

pub async fn create_category_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<Category>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.content_service.create_category(&token, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(category_id): Path<String>,
    Json(payload): Json<Category>,
) -> ApiResult<Json<Category>> {
    let category = state
        .content_service
        .update_category(&token, &RecordId::new(category_id), payload)
        .await?;
    Ok(Json(category))
}

pub async fn delete_category_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(category_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .content_service
        .delete_category(&token, &RecordId::new(category_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
