use std::sync::Arc;

use coachdesk_core::{AccessToken, AppError, AppResult};
use coachdesk_domain::UploadedImage;
use tracing::info;

use crate::gateway_ports::{ImageUpload, MediaGateway};

/// Image uploads for event covers, articles and slides.
#[derive(Clone)]
pub struct MediaService {
    media: Arc<dyn MediaGateway>,
    max_upload_bytes: usize,
}

impl MediaService {
    /// Creates a media service that accepts images up to `max_upload_bytes`.
    #[must_use]
    pub fn new(media: Arc<dyn MediaGateway>, max_upload_bytes: usize) -> Self {
        Self {
            media,
            max_upload_bytes,
        }
    }

    /// Returns the largest accepted image size in bytes.
    #[must_use]
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Validates and forwards one image.
    pub async fn upload_image(
        &self,
        token: &AccessToken,
        upload: ImageUpload,
    ) -> AppResult<UploadedImage> {
        if !upload.content_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "'{}' is not an image type",
                upload.content_type
            )));
        }

        if upload.bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_owned()));
        }

        if upload.bytes.len() > self.max_upload_bytes {
            return Err(AppError::Validation(format!(
                "image exceeds the {} byte upload limit",
                self.max_upload_bytes
            )));
        }

        let size = upload.bytes.len();
        let uploaded = self.media.upload_image(token, upload).await?;
        info!(size, url = %uploaded.url, "image uploaded");
        Ok(uploaded)
    }
}
