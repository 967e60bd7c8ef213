//! Gallery database queries.

use sqlx::PgPool;
use uuid::Uuid;

use super::GalleryError;
use crate::models::gallery::ImageRecord;
use crate::uuid::uuidv7;

/// Insert an image owned by `user_id`, returning the stored record.
pub async fn insert_image(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    data: &str,
    content_type: &str,
) -> Result<ImageRecord, GalleryError> {
    let id = uuidv7();
    let created_at = sqlx::query_scalar::<_, chrono::DateTime<chrono::Utc>>(
        "INSERT INTO images (id, user_id, title, data, content_type) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING created_at",
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(data)
    .bind(content_type)
    .fetch_one(pool)
    .await?;

    Ok(ImageRecord {
        id,
        user_id,
        title: title.to_string(),
        data: data.to_string(),
        content_type: content_type.to_string(),
        created_at,
    })
}

/// List all images owned by `user_id`, newest first.
pub async fn list_images(pool: &PgPool, user_id: Uuid) -> Result<Vec<ImageRecord>, GalleryError> {
    let rows = sqlx::query_as::<
        _,
        (
            Uuid,
            String,
            String,
            String,
            chrono::DateTime<chrono::Utc>,
        ),
    >(
        "SELECT id, title, data, content_type, created_at \
         FROM images WHERE user_id = $1 \
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, title, data, content_type, created_at)| ImageRecord {
            id,
            user_id,
            title,
            data,
            content_type,
            created_at,
        })
        .collect())
}
