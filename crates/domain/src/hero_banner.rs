use std::collections::HashSet;

use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::record::{ExtraFields, RecordId};

mod editor;
mod ordering;

pub use editor::{LayerPatch, SlideEditor};
pub use ordering::{
    apply_ordering, find_order_collisions, reordered_ids, sort_for_display, validate_ordering,
};

/// Default slide display time in milliseconds.
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 5000;

/// Suffix appended to cloned slide titles.
pub const CLONE_TITLE_SUFFIX: &str = " (Copy)";

/// Font size of a text layer created without one.
pub const DEFAULT_TEXT_FONT_SIZE: u32 = 24;

/// Color of a text layer created without one.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Entrance animation applied to slide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideAnimation {
    /// Opacity fade.
    #[default]
    Fade,
    /// Enters from the left edge.
    SlideLeft,
    /// Enters from the right edge.
    SlideRight,
    /// Enters from the bottom edge.
    SlideUp,
    /// Enters from the top edge.
    SlideDown,
    /// Scales up into place.
    ZoomIn,
    /// Scales down into place.
    ZoomOut,
    /// Bounces into place.
    Bounce,
    /// Flips around the vertical axis.
    Flip,
    /// Rotates into place.
    Rotate,
}

/// Transition used between consecutive slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideTransition {
    /// Hard cut.
    None,
    /// Cross fade.
    #[default]
    Fade,
    /// Horizontal slide.
    Slide,
    /// Parallax background.
    Parallax,
    /// Ken Burns pan and zoom.
    Kenburns,
    /// 3D cube rotation.
    Cube,
    /// Carousel strip.
    Carousel,
}

/// Direction for explicit reordering operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Towards the start of the sequence.
    Up,
    /// Towards the end of the sequence.
    Down,
}

/// Height and font size override for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOverride {
    /// Banner height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Base font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

/// Per-breakpoint overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveSettings {
    /// Desktop override.
    pub desktop: DeviceOverride,
    /// Tablet override.
    pub tablet: DeviceOverride,
    /// Mobile override.
    pub mobile: DeviceOverride,
}

/// Type-specific layer payload. Serialised under the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    /// Positioned text.
    #[serde(rename_all = "camelCase")]
    Text {
        /// Text content.
        content: String,
        /// Font size in pixels.
        font_size: u32,
        /// CSS color value.
        color: String,
    },
    /// Positioned image.
    Image {
        /// Image URL.
        src: String,
    },
}

impl LayerKind {
    /// Text payload, falling back to the default font size and color.
    #[must_use]
    pub fn text(
        content: impl Into<String>,
        font_size: Option<u32>,
        color: Option<String>,
    ) -> Self {
        Self::Text {
            content: content.into(),
            font_size: font_size.unwrap_or(DEFAULT_TEXT_FONT_SIZE),
            color: color.unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_owned()),
        }
    }

    /// Image payload.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self::Image { src: src.into() }
    }
}

/// A positioned text or image element within a slide canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer identifier, unique within its slide.
    pub id: String,
    /// Type-specific fields.
    #[serde(flatten)]
    pub kind: LayerKind,
    /// Horizontal offset in pixels from the canvas origin.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset in pixels from the canvas origin.
    #[serde(default)]
    pub y: f64,
    /// Optional width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Optional height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Layer {
    fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::Validation("layer id must not be empty".to_owned()));
        }

        if self.width.is_some_and(|width| width <= 0.0)
            || self.height.is_some_and(|height| height <= 0.0)
        {
            return Err(AppError::Validation(format!(
                "layer '{}' width and height must be positive",
                self.id
            )));
        }

        match &self.kind {
            LayerKind::Text { font_size, .. } if *font_size == 0 => Err(AppError::Validation(
                format!("text layer '{}' font size must be positive", self.id),
            )),
            LayerKind::Image { src } if src.trim().is_empty() => Err(AppError::Validation(
                format!("image layer '{}' requires a source URL", self.id),
            )),
            _ => Ok(()),
        }
    }
}

/// One hero banner slide as stored by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    /// Platform identifier; absent until created.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Headline.
    pub title: String,
    /// Secondary line.
    pub subtitle: String,
    /// Call-to-action label.
    pub button_text: String,
    /// Call-to-action target.
    pub button_link: String,
    /// Background image URL.
    pub background_image: String,
    /// Display position, 1-based.
    pub order: u32,
    /// Whether the slide is shown.
    pub is_active: bool,
    /// Whether the slide is highlighted.
    pub featured: bool,
    /// Whether the trainer search box is rendered on top of the slide.
    pub show_search_box: bool,
    /// Entrance animation.
    pub animation: SlideAnimation,
    /// Transition to the next slide.
    pub transition: SlideTransition,
    /// Display time in milliseconds.
    pub duration: u64,
    /// Animation length in milliseconds.
    pub animation_speed: u64,
    /// Delay before the animation starts, in milliseconds.
    pub delay: u64,
    /// Whether the carousel advances on its own.
    pub autoplay: bool,
    /// Whether the carousel wraps around.
    pub r#loop: bool,
    /// Per-breakpoint overrides.
    pub responsive: ResponsiveSettings,
    /// Layers in z-order.
    pub layers: Vec<Layer>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: String::new(),
            button_text: String::new(),
            button_link: String::new(),
            background_image: String::new(),
            order: 1,
            is_active: true,
            featured: false,
            show_search_box: false,
            animation: SlideAnimation::Fade,
            transition: SlideTransition::Fade,
            duration: DEFAULT_SLIDE_DURATION_MS,
            animation_speed: 1000,
            delay: 0,
            autoplay: true,
            r#loop: true,
            responsive: ResponsiveSettings::default(),
            layers: Vec::new(),
            extra: ExtraFields::new(),
        }
    }
}

impl Slide {
    /// Creates a new slide draft placed after `existing_count` slides.
    #[must_use]
    pub fn draft(title: impl Into<String>, existing_count: usize) -> Self {
        Self {
            title: title.into(),
            order: next_order(existing_count),
            ..Self::default()
        }
    }

    /// Returns a copy ready to be created as a new, inactive slide.
    ///
    /// Layer identifiers are regenerated so the copy never shares ids with
    /// its source.
    #[must_use]
    pub fn clone_as_copy(&self, existing_count: usize) -> Self {
        let mut copy = self.clone();
        copy.id = None;
        copy.is_active = false;
        copy.title = format!("{}{CLONE_TITLE_SUFFIX}", self.title);
        copy.order = next_order(existing_count);
        for layer in &mut copy.layers {
            layer.id = new_layer_id();
        }
        copy
    }

    /// Validates the slide before it is sent to the platform.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("slide title must not be empty".to_owned()));
        }

        if self.order == 0 {
            return Err(AppError::Validation(
                "slide order must start at 1".to_owned(),
            ));
        }

        if self.duration == 0 {
            return Err(AppError::Validation(
                "slide duration must be greater than zero".to_owned(),
            ));
        }

        let mut seen_layers = HashSet::new();
        for layer in &self.layers {
            layer.validate()?;
            if !seen_layers.insert(layer.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
        }

        Ok(())
    }

    /// Returns the platform id or a not-found error for unsaved drafts.
    pub fn require_id(&self) -> AppResult<&RecordId> {
        self.id
            .as_ref()
            .ok_or_else(|| AppError::NotFound("slide has not been saved yet".to_owned()))
    }
}

/// Order assigned to a slide appended after `existing_count` slides.
#[must_use]
pub fn next_order(existing_count: usize) -> u32 {
    u32::try_from(existing_count)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

pub(crate) fn new_layer_id() -> String {
    format!("layer-{}", uuid::Uuid::new_v4().simple())
}
