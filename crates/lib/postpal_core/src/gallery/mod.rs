//! Image gallery logic: data-URL decoding policy and image queries.

pub mod data_url;
pub mod queries;

use thiserror::Error;

/// Gallery errors.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Invalid image data")]
    InvalidDataUrl,

    #[error("Image size exceeds 5MB limit")]
    TooLarge,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
