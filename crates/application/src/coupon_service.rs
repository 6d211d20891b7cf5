use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{
    AnalyticsRange, Coupon, CouponAnalytics, CouponSettings, CouponState, CouponStats,
    ListFilter, Page, RecordId, paginate,
};
use serde::Serialize;
use tracing::info;

use crate::gateway_ports::{CouponGateway, RemoteFilter, SettingsGateway};
use crate::list_query::{ListQuery, unknown_sort_key};

const COUPON_SORT_KEYS: [&str; 4] = ["code", "discountValue", "usedCount", "endDate"];

/// Coupon annotated with its derived state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponListing {
    /// Platform record.
    #[serde(flatten)]
    pub coupon: Coupon,
    /// State on the listing day.
    pub state: CouponState,
}

/// Coupon management and coupon policy settings.
#[derive(Clone)]
pub struct CouponService {
    coupons: Arc<dyn CouponGateway>,
    settings: Arc<dyn SettingsGateway>,
}

impl CouponService {
    /// Creates a coupon service.
    #[must_use]
    pub fn new(coupons: Arc<dyn CouponGateway>, settings: Arc<dyn SettingsGateway>) -> Self {
        Self { coupons, settings }
    }

    /// Lists one page of coupons as of today.
    pub async fn list_coupons(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> AppResult<Page<CouponListing>> {
        self.list_coupons_on(token, query, Utc::now().date_naive())
            .await
    }

    /// Lists one page of coupons with states evaluated on `today`.
    ///
    /// The status filter matches the derived state, so it is not forwarded.
    pub async fn list_coupons_on(
        &self,
        token: &AccessToken,
        query: &ListQuery,
        today: NaiveDate,
    ) -> AppResult<Page<CouponListing>> {
        let state = query
            .status_filter()
            .map(|status| status.parse::<CouponState>())
            .transpose()?;
        let filter = coupon_filter(query, state)?;

        let remote = RemoteFilter {
            search: query.search_term().map(str::to_owned),
            status: None,
        };
        let listings = self
            .coupons
            .list_coupons(token, &remote)
            .await?
            .into_iter()
            .map(|coupon| CouponListing {
                state: coupon.state_on(today),
                coupon,
            })
            .collect();

        paginate(filter.apply(listings), query.page, query.limit)
    }

    /// Returns aggregate coupon counters.
    pub async fn coupon_stats(&self, token: &AccessToken) -> AppResult<CouponStats> {
        self.coupons.coupon_stats(token).await
    }

    /// Returns redemption analytics for one range.
    pub async fn coupon_analytics(
        &self,
        token: &AccessToken,
        range: AnalyticsRange,
    ) -> AppResult<CouponAnalytics> {
        self.coupons.coupon_analytics(token, range).await
    }

    /// Fetches one coupon.
    pub async fn get_coupon(&self, token: &AccessToken, id: &RecordId) -> AppResult<Coupon> {
        self.coupons.get_coupon(token, id).await
    }

    /// Creates a coupon after normalising and validating it.
    pub async fn create_coupon(&self, token: &AccessToken, mut coupon: Coupon) -> AppResult<Coupon> {
        coupon.id = None;
        coupon.prepare_for_submit()?;
        let created = self.coupons.create_coupon(token, &coupon).await?;
        info!(code = %created.code, "coupon created");
        Ok(created)
    }

    /// Replaces a coupon after normalising and validating it.
    pub async fn update_coupon(
        &self,
        token: &AccessToken,
        id: &RecordId,
        mut coupon: Coupon,
    ) -> AppResult<Coupon> {
        coupon.id = Some(id.clone());
        coupon.prepare_for_submit()?;
        self.coupons.update_coupon(token, id, &coupon).await
    }

    /// Deletes a coupon.
    pub async fn delete_coupon(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.coupons.delete_coupon(token, id).await?;
        info!(coupon_id = %id, "coupon deleted");
        Ok(())
    }

    /// Returns coupon policy settings.
    pub async fn coupon_settings(&self, token: &AccessToken) -> AppResult<CouponSettings> {
        self.settings.coupon_settings(token).await
    }

    /// Validates and saves coupon policy settings.
    pub async fn save_coupon_settings(
        &self,
        token: &AccessToken,
        settings: CouponSettings,
    ) -> AppResult<CouponSettings> {
        settings.validate()?;
        self.settings.save_coupon_settings(token, &settings).await
    }
}

fn coupon_filter(
    query: &ListQuery,
    state: Option<CouponState>,
) -> AppResult<ListFilter<'static, CouponListing>> {
    let filter = ListFilter::new()
        .search(query.search_term())
        .search_in(|listing: &CouponListing| Some(listing.coupon.code.as_str()))
        .search_in(|listing: &CouponListing| listing.coupon.description.as_deref())
        .matching_if(state, |listing: &CouponListing, state: &CouponState| {
            listing.state == *state
        });

    let direction = query.direction;
    let filter = match query.sort.as_deref() {
        None => filter,
        Some("code") => filter.sort_by_key(
            |listing: &CouponListing| listing.coupon.code.clone(),
            direction,
        ),
        Some("discountValue") => filter.sort_with(
            |left: &CouponListing, right: &CouponListing| {
                left.coupon
                    .discount_value
                    .total_cmp(&right.coupon.discount_value)
            },
            direction,
        ),
        Some("usedCount") => {
            filter.sort_by_key(|listing: &CouponListing| listing.coupon.used_count, direction)
        }
        Some("endDate") => filter.sort_by_key(
            |listing: &CouponListing| listing.coupon.end_date.clone(),
            direction,
        ),
        Some(other) => return Err(unknown_sort_key(other, &COUPON_SORT_KEYS)),
    };

    Ok(filter)
}
