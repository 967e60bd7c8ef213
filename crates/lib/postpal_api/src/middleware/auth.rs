//! Authentication middleware — Bearer token extraction and JWT verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;

/// Identity attached to request extensions once the gate has verified the
/// token. Lives for the current request only.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// JWT, and injects `AuthenticatedUser` into request extensions.
///
/// Rejections are all 401: absent header, non-Bearer header, expired token,
/// and everything else the verifier refuses, each with its own message.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("No token provided".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Malformed token".into()))?;

    let claims =
        postpal_core::auth::jwt::verify_token(token, state.config.jwt_secret.as_bytes())?;

    // A well-signed token always carries a UUID subject; anything else did
    // not come from this service.
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        warn!("verified token carried a non-UUID subject");
        AppError::Unauthorized("Invalid token".into())
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}
