use axum::Json;
use axum::extract::{Extension, Query, State};
use coachdesk_application::TransactionListing;
use coachdesk_core::AccessToken;
use coachdesk_domain::{FinanceSummary, Page};

use super::coalescer_key;
use crate::dto::ListQueryRequest;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_transactions_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<ListQueryRequest>,
) -> ApiResult<Json<Page<TransactionListing>>> {
    let query = params.to_list_query()?;
    let page = state
        .search_coalescer
        .run(
            &coalescer_key(&token, "transactions"),
            params.has_search(),
            || state.finance_service.list_transactions(&token, &query),
        )
        .await?;

    Ok(Json(page))
}

pub async fn finance_summary_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
) -> ApiResult<Json<FinanceSummary>> {
    let summary = state.finance_service.summary(&token).await?;
    Ok(Json(summary))
}
