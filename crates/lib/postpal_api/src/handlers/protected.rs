//! Protected-resource handler — the minimal authenticated endpoint.

use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::ProtectedResponse;

/// `GET /protected-resource` — echoes the identity the gate resolved.
pub async fn protected_resource_handler(
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<ProtectedResponse>> {
    Ok(Json(ProtectedResponse {
        message: "Access granted".into(),
        user_id: user.user_id.to_string(),
    }))
}
