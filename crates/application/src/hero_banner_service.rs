use std::sync::Arc;

use coachdesk_core::{AccessToken, AppError, AppResult};
use coachdesk_domain::{
    LayerKind, LayerPatch, MoveDirection, RecordId, Slide, SlideEditor, find_order_collisions,
    next_order, reordered_ids, sort_for_display, validate_ordering,
};
use tracing::{info, warn};

use crate::gateway_ports::HeroBannerGateway;

/// Layer to append to a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLayer {
    /// Type-specific payload.
    pub kind: LayerKind,
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Optional width in pixels.
    pub width: Option<f64>,
    /// Optional height in pixels.
    pub height: Option<f64>,
}

/// Hero banner slide lifecycle, ordering and layer editing.
#[derive(Clone)]
pub struct HeroBannerService {
    banners: Arc<dyn HeroBannerGateway>,
}

impl HeroBannerService {
    /// Creates a hero banner service.
    #[must_use]
    pub fn new(banners: Arc<dyn HeroBannerGateway>) -> Self {
        Self { banners }
    }

    /// Lists slides in display order.
    pub async fn list_slides(&self, token: &AccessToken) -> AppResult<Vec<Slide>> {
        let mut slides = self.banners.list_slides(token).await?;
        sort_for_display(&mut slides);

        let collisions = find_order_collisions(&slides);
        if !collisions.is_empty() {
            warn!(?collisions, "active hero banner slides share order values");
        }

        Ok(slides)
    }

    /// Creates a slide appended after the existing ones.
    pub async fn create_slide(&self, token: &AccessToken, mut slide: Slide) -> AppResult<Slide> {
        let existing = self.banners.list_slides(token).await?;
        slide.id = None;
        slide.order = next_order(existing.len());
        slide.validate()?;

        let created = self.banners.create_slide(token, &slide).await?;
        info!(order = created.order, "hero banner slide created");
        Ok(created)
    }

    /// Replaces a slide, layers included.
    pub async fn update_slide(
        &self,
        token: &AccessToken,
        id: &RecordId,
        mut slide: Slide,
    ) -> AppResult<Slide> {
        slide.id = Some(id.clone());
        slide.validate()?;
        self.banners.update_slide(token, id, &slide).await
    }

    /// Creates an inactive copy of a slide at the end of the sequence.
    pub async fn clone_slide(&self, token: &AccessToken, id: &RecordId) -> AppResult<Slide> {
        let slides = self.banners.list_slides(token).await?;
        let source = find_slide(&slides, id)?;
        let copy = source.clone_as_copy(slides.len());

        let created = self.banners.create_slide(token, &copy).await?;
        info!(source_id = %id, "hero banner slide cloned");
        Ok(created)
    }

    /// Deletes a slide.
    pub async fn delete_slide(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.banners.delete_slide(token, id).await?;
        info!(slide_id = %id, "hero banner slide deleted");
        Ok(())
    }

    /// Applies a complete ordering in one platform call and returns the
    /// re-fetched slides.
    pub async fn reorder_slides(
        &self,
        token: &AccessToken,
        ordered_ids: &[RecordId],
    ) -> AppResult<Vec<Slide>> {
        let slides = self.banners.list_slides(token).await?;
        validate_ordering(&slides, ordered_ids)?;

        self.banners.reorder_slides(token, ordered_ids).await?;
        info!(count = ordered_ids.len(), "hero banner slides reordered");
        self.list_slides(token).await
    }

    /// Moves a slide one step. Moving past either end changes nothing and
    /// sends no write.
    pub async fn move_slide(
        &self,
        token: &AccessToken,
        id: &RecordId,
        direction: MoveDirection,
    ) -> AppResult<Vec<Slide>> {
        let mut slides = self.banners.list_slides(token).await?;
        let Some(ordered_ids) = reordered_ids(&slides, id, direction)? else {
            sort_for_display(&mut slides);
            return Ok(slides);
        };

        self.banners.reorder_slides(token, &ordered_ids).await?;
        self.list_slides(token).await
    }

    /// Appends a layer to a slide and saves it.
    pub async fn add_layer(
        &self,
        token: &AccessToken,
        slide_id: &RecordId,
        layer: NewLayer,
    ) -> AppResult<Slide> {
        self.edit_slide(token, slide_id, |editor| {
            editor.add_layer(layer.kind, layer.x, layer.y, layer.width, layer.height)?;
            Ok(true)
        })
        .await
    }

    /// Patches one layer and saves the slide.
    pub async fn update_layer(
        &self,
        token: &AccessToken,
        slide_id: &RecordId,
        layer_id: &str,
        patch: LayerPatch,
    ) -> AppResult<Slide> {
        self.edit_slide(token, slide_id, |editor| {
            editor.update_layer(layer_id, patch)?;
            Ok(true)
        })
        .await
    }

    /// Removes one layer and saves the slide.
    pub async fn remove_layer(
        &self,
        token: &AccessToken,
        slide_id: &RecordId,
        layer_id: &str,
    ) -> AppResult<Slide> {
        self.edit_slide(token, slide_id, |editor| {
            editor.remove_layer(layer_id)?;
            Ok(true)
        })
        .await
    }

    /// Moves one layer a step in z-order and saves the slide.
    pub async fn move_layer(
        &self,
        token: &AccessToken,
        slide_id: &RecordId,
        layer_id: &str,
        direction: MoveDirection,
    ) -> AppResult<Slide> {
        self.edit_slide(token, slide_id, |editor| {
            editor.move_layer(layer_id, direction)
        })
        .await
    }

    async fn edit_slide<F>(
        &self,
        token: &AccessToken,
        slide_id: &RecordId,
        edit: F,
    ) -> AppResult<Slide>
    where
        F: FnOnce(&mut SlideEditor) -> AppResult<bool> + Send,
    {
        let slides = self.banners.list_slides(token).await?;
        let slide = find_slide(&slides, slide_id)?.clone();

        let mut editor = SlideEditor::open(slide);
        if !edit(&mut editor)? {
            return Ok(editor.slide().clone());
        }

        let slide = editor.finish()?;
        self.banners.update_slide(token, slide_id, &slide).await
    }
}

fn find_slide<'a>(slides: &'a [Slide], id: &RecordId) -> AppResult<&'a Slide> {
    slides
        .iter()
        .find(|slide| slide.id.as_ref() == Some(id))
        .ok_or_else(|| AppError::NotFound(format!("slide '{id}' does not exist")))
}
