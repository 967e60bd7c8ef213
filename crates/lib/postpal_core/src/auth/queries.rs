//! Auth-related database queries.

use sqlx::PgPool;
use uuid::Uuid;

use super::AuthError;
use crate::models::auth::{User, UserCredentials};

/// Check whether a username is already taken.
pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new user with score 0, returning the user ID.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<Uuid, AuthError> {
    let user_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user_id)
}

/// Fetch the credential row for a username, for the login flow.
pub async fn find_credentials_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<UserCredentials>, AuthError> {
    let row = sqlx::query_as::<_, (Uuid, String)>(
        "SELECT id, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id, password_hash)| UserCredentials { id, password_hash }))
}

/// Fetch a user by ID.
pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, AuthError> {
    let row =
        sqlx::query_as::<_, (String, i64)>("SELECT username, score FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(username, score)| User {
        id: user_id,
        username,
        score,
    }))
}

/// Fetch a user's score.
pub async fn get_score(pool: &PgPool, user_id: Uuid) -> Result<Option<i64>, AuthError> {
    let score = sqlx::query_scalar::<_, i64>("SELECT score FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(score)
}

/// Set a user's score, returning the stored value. `None` if the user row
/// is gone.
pub async fn set_score(
    pool: &PgPool,
    user_id: Uuid,
    score: i64,
) -> Result<Option<i64>, AuthError> {
    let stored =
        sqlx::query_scalar::<_, i64>("UPDATE users SET score = $1 WHERE id = $2 RETURNING score")
            .bind(score)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(stored)
}
