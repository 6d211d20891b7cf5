use async_trait::async_trait;
use coachdesk_application::HeroBannerGateway;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{RecordId, Slide};
use reqwest::Method;
use serde::Serialize;

use crate::platform_api_client::PlatformApiClient;

const HERO_BANNERS: [&str; 2] = ["admin", "hero-banners"];

#[derive(Serialize)]
struct ReorderRequest<'a> {
    ids: &'a [RecordId],
}

/// Platform-backed hero banner gateway.
#[derive(Clone)]
pub struct RestHeroBannerGateway {
    client: PlatformApiClient,
}

impl RestHeroBannerGateway {
    /// Creates a hero banner gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

fn slide_path(id: &RecordId) -> [&str; 3] {
    [HERO_BANNERS[0], HERO_BANNERS[1], id.as_str()]
}

#[async_trait]
impl HeroBannerGateway for RestHeroBannerGateway {
    async fn list_slides(&self, token: &AccessToken) -> AppResult<Vec<Slide>> {
        self.client.get_list(token, &HERO_BANNERS, &[]).await
    }

    async fn create_slide(&self, token: &AccessToken, slide: &Slide) -> AppResult<Slide> {
        self.client
            .send_record(Method::POST, token, &HERO_BANNERS, slide)
            .await
    }

    async fn update_slide(
        &self,
        token: &AccessToken,
        id: &RecordId,
        slide: &Slide,
    ) -> AppResult<Slide> {
        self.client
            .send_record(Method::PUT, token, &slide_path(id), slide)
            .await
    }

    async fn delete_slide(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.client.delete(token, &slide_path(id)).await
    }

    // Needs the platform's bulk order route; there is no per-slide fallback.
    async fn reorder_slides(
        &self,
        token: &AccessToken,
        ordered_ids: &[RecordId],
    ) -> AppResult<()> {
        self.client
            .send_command(
                Method::PUT,
                token,
                &[HERO_BANNERS[0], HERO_BANNERS[1], "order"],
                &ReorderRequest { ids: ordered_ids },
            )
            .await
    }
}
