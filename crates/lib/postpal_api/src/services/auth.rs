//! Authentication service — registration and login flows over `postpal_core`.

use sqlx::PgPool;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, MessageResponse};

/// Require a present, non-empty username and password. Checked before any
/// store or hashing work.
fn require_credentials<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> AppResult<(&'a str, &'a str)> {
    match (username, password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(AppError::Validation(
            "Username and password are required".into(),
        )),
    }
}

/// Register a new account. No token is issued; login is a separate step.
pub async fn register(
    pool: &PgPool,
    username: Option<&str>,
    password: Option<&str>,
) -> AppResult<MessageResponse> {
    let (username, password) = require_credentials(username, password)?;

    if postpal_core::auth::queries::username_exists(pool, username).await? {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let password_hash = postpal_core::auth::password::hash_password(password)?;
    let user_id = postpal_core::auth::queries::create_user(pool, username, &password_hash).await?;

    info!(%user_id, "user registered");
    Ok(MessageResponse {
        message: "User registered successfully".into(),
    })
}

/// Authenticate with username + password, returning a fresh token.
///
/// An unknown username and a wrong password produce the identical error so
/// the response never reveals which accounts exist.
pub async fn login(
    pool: &PgPool,
    username: Option<&str>,
    password: Option<&str>,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    let (username, password) = require_credentials(username, password)?;

    let creds = postpal_core::auth::queries::find_credentials_by_username(pool, username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !postpal_core::auth::password::verify_password(password, &creds.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = postpal_core::auth::jwt::issue_token(&creds.id.to_string(), jwt_secret)?;

    Ok(LoginResponse {
        token,
        message: "Login successful".into(),
    })
}
