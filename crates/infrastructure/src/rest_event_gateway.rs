use async_trait::async_trait;
use coachdesk_application::{EventGateway, ImageUpload, MediaGateway, RemoteFilter};
use coachdesk_core::{AccessToken, AppError, AppResult};
use coachdesk_domain::{Event, EventStats, RecordId, UploadedImage};
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed event and media upload gateway.
#[derive(Clone)]
pub struct RestEventGateway {
    client: PlatformApiClient,
}

impl RestEventGateway {
    /// Creates an event gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventGateway for RestEventGateway {
    async fn list_events(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Event>> {
        self.client
            .get_list(token, &["events"], &filter.query_pairs())
            .await
    }

    async fn event_stats(&self, token: &AccessToken) -> AppResult<EventStats> {
        self.client.get_record(token, &["events", "stats"], &[]).await
    }

    async fn get_event(&self, token: &AccessToken, id: &RecordId) -> AppResult<Event> {
        self.client
            .get_record(token, &["events", id.as_str()], &[])
            .await
    }

    async fn create_event(&self, token: &AccessToken, event: &Event) -> AppResult<Event> {
        self.client
            .send_record(Method::POST, token, &["events"], event)
            .await
    }

    async fn update_event(
        &self,
        token: &AccessToken,
        id: &RecordId,
        event: &Event,
    ) -> AppResult<Event> {
        self.client
            .send_record(Method::PUT, token, &["events", id.as_str()], event)
            .await
    }

    async fn delete_event(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.client.delete(token, &["events", id.as_str()]).await
    }
}

#[async_trait]
impl MediaGateway for RestEventGateway {
    async fn upload_image(
        &self,
        token: &AccessToken,
        upload: ImageUpload,
    ) -> AppResult<UploadedImage> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.content_type.as_str())
            .map_err(|error| {
                AppError::Validation(format!(
                    "invalid image content type '{}': {error}",
                    upload.content_type
                ))
            })?;

        self.client
            .send_multipart(token, &["upload", "image"], Form::new().part("image", part))
            .await
    }
}
