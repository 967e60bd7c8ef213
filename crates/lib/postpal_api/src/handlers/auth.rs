//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::services::auth;

/// `POST /register` — create a new account. 201 on success.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let resp = auth::register(
        &state.pool,
        body.username.as_deref(),
        body.password.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `POST /login` — authenticate with username + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        &state.pool,
        body.username.as_deref(),
        body.password.as_deref(),
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}
