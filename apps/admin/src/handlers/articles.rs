use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use coachdesk_core::AccessToken;
use coachdesk_domain::{Article, ArticleStats, Page, RecordId};

use super::coalescer_key;
use crate::dto::ListQueryRequest;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_articles_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<ListQueryRequest>,
) -> ApiResult<Json<Page<Article>>> {
    let query = params.to_list_query()?;
    let page = state
        .search_coalescer
        .run(
            &coalescer_key(&token, "articles"),
            params.has_search(),
            || state.content_service.list_articles(&token, &query),
        )
        .await?;

    Ok(Json(page))
}

pub async fn article_stats_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<ArticleStats>> {
    let stats = state.content_service.article_stats(&token).await?;
    Ok(Json(stats))
}

pub async fn get_article_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<Article>> {
    let article = state
        .content_service
        .get_article(&token, &RecordId::new(article_id))
        .await?;
    Ok(Json(article))
}

pub async fn create_article_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Json(payload): Json<Article>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    let article = state.content_service.create_article(&token, payload).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn update_article_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(article_id): Path<String>,
    Json(payload): Json<Article>,
) -> ApiResult<Json<Article>> {
    let article = state
        .content_service
        .update_article(&token, &RecordId::new(article_id), payload)
        .await?;
    Ok(Json(article))
}

pub async fn delete_article_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Path(article_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .content_service
        .delete_article(&token, &RecordId::new(article_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
