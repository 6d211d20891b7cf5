use axum::Json;
use axum::extract::{Extension, Multipart, State};
use axum::http::StatusCode;
use coachdesk_application::ImageUpload;
use coachdesk_core::{AccessToken, AppError};
use coachdesk_domain::UploadedImage;

use crate::error::ApiResult;
use crate::state::AppState;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

pub async fn upload_image_handler(
    State(state): State<AppState>,
    Extension(token): Extension<AccessToken>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadedImage>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| AppError::Validation(format!("invalid multipart body: {error}")))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|error| AppError::Validation(format!("failed to read image: {error}")))?;

        let uploaded = state
            .media_service
            .upload_image(
                &token,
                ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                },
            )
            .await?;

        return Ok((StatusCode::CREATED, Json(uploaded)));
    }

    Err(AppError::Validation(format!("multipart field '{IMAGE_FIELD}' is required")).into())
}
