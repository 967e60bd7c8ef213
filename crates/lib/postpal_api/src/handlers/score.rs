//! Score request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::ScoreResponse;
use crate::services::score;

/// `GET /score` — the authenticated user's score.
pub async fn get_score_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<ScoreResponse>> {
    let resp = score::fetch(&state.pool, user.user_id).await?;
    Ok(Json(resp))
}

/// `POST /score` — replace the authenticated user's score.
///
/// The body is taken as raw JSON so a non-numeric `score` answers the
/// contract's 400 `{message}` instead of an extractor rejection.
pub async fn update_score_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<ScoreResponse>> {
    let resp = score::update(&state.pool, user.user_id, &body).await?;
    Ok(Json(resp))
}
