use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{RecordId, Slide};

/// Port for platform hero banner endpoints.
#[async_trait]
pub trait HeroBannerGateway: Send + Sync {
    /// Lists every slide.
    async fn list_slides(&self, token: &AccessToken) -> AppResult<Vec<Slide>>;

    /// Creates a slide, layers included.
    async fn create_slide(&self, token: &AccessToken, slide: &Slide) -> AppResult<Slide>;

    /// Replaces a slide, layers included.
    async fn update_slide(
        &self,
        token: &AccessToken,
        id: &RecordId,
        slide: &Slide,
    ) -> AppResult<Slide>;

    /// Deletes a slide.
    async fn delete_slide(&self, token: &AccessToken, id: &RecordId) -> AppResult<()>;

    /// Atomically assigns orders `1..=n` following `ordered_ids`.
    ///
    /// The platform must apply the whole ordering in one transaction. The
    /// REST adapter requires `PUT /admin/hero-banners/order` with body
    /// `{"ids": [...]}`, routed ahead of `PUT /admin/hero-banners/:id`;
    /// a platform without it would treat `order` as a slide id and answer
    /// 404 or 400, which surfaces as an error rather than a partial write.
    async fn reorder_slides(&self, token: &AccessToken, ordered_ids: &[RecordId]) -> AppResult<()>;
}
