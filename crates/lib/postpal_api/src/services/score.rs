//! Score service — per-user score read and update.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::ScoreResponse;

/// Fetch the authenticated user's score.
pub async fn fetch(pool: &PgPool, user_id: Uuid) -> AppResult<ScoreResponse> {
    let score = postpal_core::auth::queries::get_score(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(ScoreResponse { score })
}

/// Replace the authenticated user's score with the integer carried in the
/// request body.
pub async fn update(
    pool: &PgPool,
    user_id: Uuid,
    body: &serde_json::Value,
) -> AppResult<ScoreResponse> {
    let score = body
        .get("score")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| AppError::Validation("Score must be a number".into()))?;

    let stored = postpal_core::auth::queries::set_score(pool, user_id, score)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(ScoreResponse { score: stored })
}
