//! Gallery request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{GalleryResponse, UploadRequest, UploadResponse};
use crate::services::gallery;

/// `POST /upload` — store a data-URL image for the authenticated user.
pub async fn upload_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<UploadRequest>,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let resp = gallery::upload(
        &state.pool,
        user.user_id,
        body.title.as_deref(),
        body.image.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `GET /gallery` — the authenticated user's images, newest first.
pub async fn gallery_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<GalleryResponse>> {
    let resp = gallery::list(&state.pool, user.user_id).await?;
    Ok(Json(resp))
}
