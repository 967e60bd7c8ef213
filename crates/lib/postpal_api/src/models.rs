//! API request/response types.
//!
//! Wire shapes use camelCase field names where the original clients expect
//! them. Request fields arrive as `Option` so that missing-field checks can
//! answer 400 with the contract's `{message}` body instead of a rejection
//! from the JSON extractor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic `{message}` body, also used for all error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub title: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub image: ImageSummary,
}

/// The slim shape returned from an upload: ID and title only.
#[derive(Debug, Serialize)]
pub struct ImageSummary {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub data: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
    pub db_connected: bool,
}
