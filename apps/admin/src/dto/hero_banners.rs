use coachdesk_application::NewLayer;
use coachdesk_core::{AppError, AppResult};
use coachdesk_domain::{LayerKind, MoveDirection, RecordId};
use serde::Deserialize;
use ts_rs::TS;

/// Complete slide order, first slide first.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/reorder-slides-request.ts"
)]
pub struct ReorderSlidesRequest {
    pub ids: Vec<String>,
}

impl ReorderSlidesRequest {
    pub fn record_ids(&self) -> Vec<RecordId> {
        self.ids.iter().map(|id| RecordId::new(id.as_str())).collect()
    }
}

/// One-step move of a slide or layer.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/move-request.ts"
)]
pub struct MoveRequest {
    /// `up` or `down`.
    pub direction: String,
}

impl MoveRequest {
    pub fn move_direction(&self) -> AppResult<MoveDirection> {
        match self.direction.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            other => Err(AppError::Validation(format!(
                "move direction must be 'up' or 'down', got '{other}'"
            ))),
        }
    }
}

/// Incoming payload for a new text or image layer.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-layer-request.ts"
)]
pub struct CreateLayerRequest {
    /// `text` or `image`.
    #[serde(rename = "type")]
    pub layer_type: String,
    pub content: Option<String>,
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub src: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl CreateLayerRequest {
    pub fn into_new_layer(self) -> AppResult<NewLayer> {
        let kind = match self.layer_type.as_str() {
            "text" => LayerKind::text(
                self.content.unwrap_or_default(),
                self.font_size,
                self.color,
            ),
            "image" => LayerKind::image(self.src.unwrap_or_default()),
            other => {
                return Err(AppError::Validation(format!(
                    "layer type must be 'text' or 'image', got '{other}'"
                )));
            }
        };

        Ok(NewLayer {
            kind,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        })
    }
}
