use std::cmp::Ordering;
use std::sync::Arc;

use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{
    Event, EventStats, GeoPoint, ListFilter, Page, RecordId, SortDirection, ThaiDateStyle,
    format_thai_date, paginate, parse_platform_date,
};
use serde::Serialize;
use tracing::info;

use crate::gateway_ports::EventGateway;
use crate::list_query::{ListQuery, unknown_sort_key};

const EVENT_SORT_KEYS: [&str; 4] = ["startDate", "title", "price", "distance"];

/// Event annotated with display and distance fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListing {
    /// Platform record.
    #[serde(flatten)]
    pub event: Event,
    /// Distance from the requested point in kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Start date in the Thai long format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_display: Option<String>,
}

impl EventListing {
    fn new(event: Event, near: Option<GeoPoint>) -> Self {
        let distance_km = near
            .zip(event.point())
            .map(|(origin, venue)| origin.distance_to(&venue));
        let start_date_display = parse_platform_date(&event.start_date)
            .map(|date| format_thai_date(date, ThaiDateStyle::Long));

        Self {
            event,
            distance_km,
            start_date_display,
        }
    }
}

/// Event management.
#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventGateway>,
}

impl EventService {
    /// Creates an event service.
    #[must_use]
    pub fn new(events: Arc<dyn EventGateway>) -> Self {
        Self { events }
    }

    /// Lists one page of events.
    ///
    /// With `near` set every event with coordinates gets a distance and,
    /// unless another sort key is requested, the nearest events come first.
    pub async fn list_events(
        &self,
        token: &AccessToken,
        query: &ListQuery,
        near: Option<GeoPoint>,
    ) -> AppResult<Page<EventListing>> {
        let filter = event_filter(query, near.is_some())?;
        let listings = self
            .events
            .list_events(token, &query.remote_filter())
            .await?
            .into_iter()
            .map(|event| EventListing::new(event, near))
            .collect();

        paginate(filter.apply(listings), query.page, query.limit)
    }

    /// Returns aggregate event counters.
    pub async fn event_stats(&self, token: &AccessToken) -> AppResult<EventStats> {
        self.events.event_stats(token).await
    }

    /// Fetches one event.
    pub async fn get_event(&self, token: &AccessToken, id: &RecordId) -> AppResult<Event> {
        self.events.get_event(token, id).await
    }

    /// Creates an event after applying submission defaults.
    pub async fn create_event(&self, token: &AccessToken, mut event: Event) -> AppResult<Event> {
        event.id = None;
        event.prepare_for_submit()?;
        let created = self.events.create_event(token, &event).await?;
        info!(title = %created.title, "event created");
        Ok(created)
    }

    /// Replaces an event after applying submission defaults.
    pub async fn update_event(
        &self,
        token: &AccessToken,
        id: &RecordId,
        mut event: Event,
    ) -> AppResult<Event> {
        event.id = Some(id.clone());
        event.prepare_for_submit()?;
        self.events.update_event(token, id, &event).await
    }

    /// Deletes an event.
    pub async fn delete_event(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.events.delete_event(token, id).await?;
        info!(event_id = %id, "event deleted");
        Ok(())
    }
}

fn compare_distance(left: &EventListing, right: &EventListing) -> Ordering {
    let key = |listing: &EventListing| listing.distance_km.unwrap_or(f64::INFINITY);
    key(left).total_cmp(&key(right))
}

fn event_filter(
    query: &ListQuery,
    has_origin: bool,
) -> AppResult<ListFilter<'static, EventListing>> {
    let filter = ListFilter::new()
        .search(query.search_term())
        .search_in(|listing: &EventListing| Some(listing.event.title.as_str()))
        .search_in(|listing: &EventListing| listing.event.location.as_deref())
        .matching_if(
            query.status_filter(),
            |listing: &EventListing, status: &String| {
                listing.event.status.eq_ignore_ascii_case(status)
            },
        );

    let direction = query.direction;
    let filter = match query.sort.as_deref() {
        None if has_origin => filter.sort_with(compare_distance, SortDirection::Asc),
        None => filter,
        Some("distance") => filter.sort_with(compare_distance, direction),
        Some("startDate") => filter.sort_by_key(
            |listing: &EventListing| parse_platform_date(&listing.event.start_date),
            direction,
        ),
        Some("title") => filter.sort_by_key(
            |listing: &EventListing| listing.event.title.to_lowercase(),
            direction,
        ),
        Some("price") => filter.sort_with(
            |left: &EventListing, right: &EventListing| {
                left.event
                    .price
                    .unwrap_or_default()
                    .total_cmp(&right.event.price.unwrap_or_default())
            },
            direction,
        ),
        Some(other) => return Err(unknown_sort_key(other, &EVENT_SORT_KEYS)),
    };

    Ok(filter)
}
