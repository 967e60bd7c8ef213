//! Gallery service — image upload and listing.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{GalleryImage, GalleryResponse, ImageSummary, UploadResponse};

/// Title used when the client omits one.
const DEFAULT_TITLE: &str = "Untitled";

/// Validate and store an uploaded data-URL image.
pub async fn upload(
    pool: &PgPool,
    user_id: Uuid,
    title: Option<&str>,
    image: Option<&str>,
) -> AppResult<UploadResponse> {
    let image = image
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Image data is required".into()))?;

    let parsed = postpal_core::gallery::data_url::parse_data_url(image)?;
    let title = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);

    let record = postpal_core::gallery::queries::insert_image(
        pool,
        user_id,
        title,
        &parsed.payload,
        &parsed.content_type,
    )
    .await?;

    info!(%user_id, image_id = %record.id, content_type = %record.content_type, "image uploaded");
    Ok(UploadResponse {
        message: "Image uploaded successfully".into(),
        image: ImageSummary {
            id: record.id.to_string(),
            title: record.title,
        },
    })
}

/// List the authenticated user's images, newest first.
pub async fn list(pool: &PgPool, user_id: Uuid) -> AppResult<GalleryResponse> {
    let records = postpal_core::gallery::queries::list_images(pool, user_id).await?;
    let images = records
        .into_iter()
        .map(|r| GalleryImage {
            id: r.id.to_string(),
            title: r.title,
            data: r.data,
            content_type: r.content_type,
            created_at: r.created_at,
        })
        .collect();
    Ok(GalleryResponse { images })
}
