use std::str::FromStr;

use coachdesk_application::{DEFAULT_PAGE_LIMIT, ListQuery};
use coachdesk_core::{AppError, AppResult};
use coachdesk_domain::{AnalyticsRange, GeoPoint, SortDirection};
use serde::Deserialize;
use ts_rs::TS;

/// Largest page a list endpoint will serve.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/list-query-request.ts"
)]
pub struct ListQueryRequest {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Reference latitude for distance sorting (events only).
    pub near_lat: Option<f64>,
    /// Reference longitude for distance sorting (events only).
    pub near_lng: Option<f64>,
}

impl ListQueryRequest {
    /// Converts raw parameters into a validated list query.
    pub fn to_list_query(&self) -> AppResult<ListQuery> {
        let direction = self
            .direction
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(SortDirection::from_str)
            .transpose()?
            .unwrap_or_default();

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit > MAX_PAGE_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must not exceed {MAX_PAGE_LIMIT}"
            )));
        }

        Ok(ListQuery {
            search: self.search.clone(),
            status: self.status.clone(),
            sort: self
                .sort
                .clone()
                .filter(|value| !value.trim().is_empty()),
            direction,
            page: self.page.unwrap_or(1),
            limit,
        })
    }

    /// Returns the reference point when both coordinates are given.
    pub fn near_point(&self) -> AppResult<Option<GeoPoint>> {
        match (self.near_lat, self.near_lng) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                    return Err(AppError::Validation(
                        "near_lat/near_lng are out of range".to_owned(),
                    ));
                }
                Ok(Some(GeoPoint { lat, lng }))
            }
            (None, None) => Ok(None),
            _ => Err(AppError::Validation(
                "near_lat and near_lng must be given together".to_owned(),
            )),
        }
    }

    /// Whether the request carries a search term worth debouncing.
    #[must_use]
    pub fn has_search(&self) -> bool {
        self.search
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

/// Query parameters for coupon analytics.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/analytics-query-request.ts"
)]
pub struct AnalyticsQueryRequest {
    /// One of `7d`, `30d`, `90d`, `1y`; defaults to `30d`.
    pub range: Option<String>,
}

impl AnalyticsQueryRequest {
    pub fn analytics_range(&self) -> AppResult<AnalyticsRange> {
        self.range
            .as_deref()
            .map(AnalyticsRange::from_str)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

/// Query parameters for the revenue chart.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/revenue-chart-query-request.ts"
)]
pub struct RevenueChartQueryRequest {
    /// One of `week`, `month`, `year`.
    pub period: Option<String>,
}
