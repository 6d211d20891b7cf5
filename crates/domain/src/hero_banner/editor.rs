use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::{Layer, LayerKind, MoveDirection, Slide, new_layer_id};

/// Field-level layer update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerPatch {
    /// New horizontal offset.
    pub x: Option<f64>,
    /// New vertical offset.
    pub y: Option<f64>,
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
    /// New text content (text layers only).
    pub content: Option<String>,
    /// New font size (text layers only).
    pub font_size: Option<u32>,
    /// New color (text layers only).
    pub color: Option<String>,
    /// New image source (image layers only).
    pub src: Option<String>,
}

impl LayerPatch {
    fn touches_text_fields(&self) -> bool {
        self.content.is_some() || self.font_size.is_some() || self.color.is_some()
    }
}

/// In-memory editing session over one slide's layers.
///
/// Layer changes only reach the platform when the finished slide is saved.
#[derive(Debug, Clone)]
pub struct SlideEditor {
    slide: Slide,
}

impl SlideEditor {
    /// Opens an editing session on a slide.
    #[must_use]
    pub fn open(slide: Slide) -> Self {
        Self { slide }
    }

    /// Returns the slide being edited.
    #[must_use]
    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    /// Appends a layer with a freshly generated id.
    pub fn add_layer(
        &mut self,
        kind: LayerKind,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
    ) -> AppResult<&Layer> {
        let layer = Layer {
            id: new_layer_id(),
            kind,
            x,
            y,
            width,
            height,
        };
        layer.validate()?;

        let index = self.slide.layers.len();
        self.slide.layers.push(layer);
        Ok(&self.slide.layers[index])
    }

    /// Applies a field-level patch to one layer.
    pub fn update_layer(&mut self, layer_id: &str, patch: LayerPatch) -> AppResult<&Layer> {
        let index = self.layer_index(layer_id)?;
        let mut updated = self.slide.layers[index].clone();

        match &mut updated.kind {
            LayerKind::Text {
                content,
                font_size,
                color,
            } => {
                if patch.src.is_some() {
                    return Err(AppError::Validation(format!(
                        "text layer '{layer_id}' has no image source"
                    )));
                }
                if let Some(value) = patch.content {
                    *content = value;
                }
                if let Some(value) = patch.font_size {
                    *font_size = value;
                }
                if let Some(value) = patch.color {
                    *color = value;
                }
            }
            LayerKind::Image { src } => {
                if patch.touches_text_fields() {
                    return Err(AppError::Validation(format!(
                        "image layer '{layer_id}' has no text fields"
                    )));
                }
                if let Some(value) = patch.src {
                    *src = value;
                }
            }
        }

        if let Some(value) = patch.x {
            updated.x = value;
        }
        if let Some(value) = patch.y {
            updated.y = value;
        }
        if patch.width.is_some() {
            updated.width = patch.width;
        }
        if patch.height.is_some() {
            updated.height = patch.height;
        }

        updated.validate()?;
        self.slide.layers[index] = updated;
        Ok(&self.slide.layers[index])
    }

    /// Removes one layer and returns it.
    pub fn remove_layer(&mut self, layer_id: &str) -> AppResult<Layer> {
        let index = self.layer_index(layer_id)?;
        Ok(self.slide.layers.remove(index))
    }

    /// Swaps a layer with its neighbour. Returns `false` when already at the edge.
    pub fn move_layer(&mut self, layer_id: &str, direction: MoveDirection) -> AppResult<bool> {
        let index = self.layer_index(layer_id)?;
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.slide.layers.len() => index + 1,
            _ => return Ok(false),
        };

        self.slide.layers.swap(index, target);
        Ok(true)
    }

    /// Ends the session and returns the validated slide.
    pub fn finish(self) -> AppResult<Slide> {
        self.slide.validate()?;
        Ok(self.slide)
    }

    fn layer_index(&self, layer_id: &str) -> AppResult<usize> {
        self.slide
            .layers
            .iter()
            .position(|layer| layer.id == layer_id)
            .ok_or_else(|| AppError::NotFound(format!("layer '{layer_id}' does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use coachdesk_core::AppError;

    use super::{LayerPatch, SlideEditor};
    use crate::hero_banner::{LayerKind, MoveDirection, Slide};

    fn editor_with_two_layers() -> (SlideEditor, String, String) {
        let mut editor = SlideEditor::open(Slide::draft("Editor", 0));
        let text_id = editor
            .add_layer(LayerKind::text("Hello", None, None), 10.0, 20.0, None, None)
            .map(|layer| layer.id.clone())
            .unwrap_or_else(|_| unreachable!());
        let image_id = editor
            .add_layer(
                LayerKind::image("https://cdn.example/coach.png"),
                0.0,
                0.0,
                None,
                None,
            )
            .map(|layer| layer.id.clone())
            .unwrap_or_else(|_| unreachable!());
        (editor, text_id, image_id)
    }

    #[test]
    fn update_layer_patches_only_given_fields() {
        let (mut editor, text_id, _) = editor_with_two_layers();

        let result = editor.update_layer(
            &text_id,
            LayerPatch {
                x: Some(55.0),
                font_size: Some(40),
                ..LayerPatch::default()
            },
        );
        assert!(result.is_ok());

        let layer = &editor.slide().layers[0];
        assert_eq!(layer.x, 55.0);
        assert_eq!(layer.y, 20.0);
        match &layer.kind {
            LayerKind::Text {
                content, font_size, ..
            } => {
                assert_eq!(content, "Hello");
                assert_eq!(*font_size, 40);
            }
            LayerKind::Image { .. } => unreachable!(),
        }
    }

    #[test]
    fn update_layer_rejects_fields_of_other_kind() {
        let (mut editor, text_id, image_id) = editor_with_two_layers();

        let text_result = editor
            .update_layer(
                &text_id,
                LayerPatch {
                    src: Some("https://cdn.example/x.png".to_owned()),
                    ..LayerPatch::default()
                },
            )
            .map(|_| ());
        assert!(matches!(text_result, Err(AppError::Validation(_))));

        let image_result = editor
            .update_layer(
                &image_id,
                LayerPatch {
                    color: Some("#000".to_owned()),
                    ..LayerPatch::default()
                },
            )
            .map(|_| ());
        assert!(matches!(image_result, Err(AppError::Validation(_))));
    }

    #[test]
    fn move_layer_swaps_neighbours_and_stops_at_edges() {
        let (mut editor, text_id, image_id) = editor_with_two_layers();

        assert!(matches!(editor.move_layer(&text_id, MoveDirection::Up), Ok(false)));
        assert!(matches!(editor.move_layer(&text_id, MoveDirection::Down), Ok(true)));
        assert_eq!(editor.slide().layers[0].id, image_id);
        assert_eq!(editor.slide().layers[1].id, text_id);
        assert!(matches!(editor.move_layer(&text_id, MoveDirection::Down), Ok(false)));
    }

    #[test]
    fn remove_unknown_layer_is_not_found() {
        let (mut editor, _, _) = editor_with_two_layers();
        assert!(matches!(editor.remove_layer("missing"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn finish_validates_slide() {
        let mut editor = SlideEditor::open(Slide::draft("  ", 0));
        let added = editor
            .add_layer(LayerKind::text("x", None, None), 0.0, 0.0, None, None)
            .map(|_| ());
        assert!(added.is_ok());
        assert!(editor.finish().is_err());
    }
}
