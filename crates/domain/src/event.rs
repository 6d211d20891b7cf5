use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::formatting::parse_platform_date;
use crate::geo::GeoPoint;
use crate::record::{ExtraFields, RecordId};

/// Event status assigned when a draft is submitted without one.
pub const DEFAULT_EVENT_STATUS: &str = "upcoming";

/// Group training event or workshop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Event name.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Venue name or address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Venue latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Venue longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Start timestamp.
    pub start_date: String,
    /// End timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Lifecycle status (`upcoming`, `ongoing`, `completed`, `cancelled`).
    pub status: String,
    /// Seat limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Seats taken.
    pub registered_count: u32,
    /// Ticket price in baht.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Organising trainer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<RecordId>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Event {
    /// Applies submission defaults and validates the draft.
    pub fn prepare_for_submit(&mut self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("event title must not be empty".to_owned()));
        }

        let start = parse_platform_date(&self.start_date).ok_or_else(|| {
            AppError::Validation(format!(
                "event start date '{}' is not a valid date",
                self.start_date
            ))
        })?;

        if let Some(end) = self.end_date.as_deref().and_then(parse_platform_date)
            && end < start
        {
            return Err(AppError::Validation(
                "event end date must not precede its start date".to_owned(),
            ));
        }

        if let Some(point) = self.point()
            && (!(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lng))
        {
            return Err(AppError::Validation(
                "event coordinates are out of range".to_owned(),
            ));
        }

        if self.status.trim().is_empty() {
            DEFAULT_EVENT_STATUS.clone_into(&mut self.status);
        }

        Ok(())
    }

    /// Returns venue coordinates when both are known.
    #[must_use]
    pub fn point(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            lat: self.latitude?,
            lng: self.longitude?,
        })
    }
}

/// Aggregate event counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventStats {
    /// All events.
    pub total: u64,
    /// Events that have not started.
    pub upcoming: u64,
    /// Events in progress.
    pub ongoing: u64,
    /// Finished events.
    pub completed: u64,
    /// Registrations across all events.
    pub total_registrations: u64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Result of an image upload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedImage {
    /// Public URL of the stored image.
    #[serde(alias = "imageUrl")]
    pub url: String,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}
