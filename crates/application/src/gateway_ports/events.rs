use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{Event, EventStats, RecordId, UploadedImage};

use super::RemoteFilter;

/// Port for platform event endpoints.
#[async_trait]
pub trait EventGateway: Send + Sync {
    /// Lists events matching the forwarded filter.
    async fn list_events(&self, token: &AccessToken, filter: &RemoteFilter)
    -> AppResult<Vec<Event>>;

    /// Returns aggregate event counters.
    async fn event_stats(&self, token: &AccessToken) -> AppResult<EventStats>;

    /// Fetches one event.
    async fn get_event(&self, token: &AccessToken, id: &RecordId) -> AppResult<Event>;

    /// Creates an event.
    async fn create_event(&self, token: &AccessToken, event: &Event) -> AppResult<Event>;

    /// Replaces an event.
    async fn update_event(
        &self,
        token: &AccessToken,
        id: &RecordId,
        event: &Event,
    ) -> AppResult<Event>;

    /// Deletes an event.
    async fn delete_event(&self, token: &AccessToken, id: &RecordId) -> AppResult<()>;
}

/// Image file forwarded to the platform upload endpoint.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the browser.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Port for the platform media upload endpoint.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    /// Uploads one image and returns its public URL.
    async fn upload_image(&self, token: &AccessToken, upload: ImageUpload)
    -> AppResult<UploadedImage>;
}
