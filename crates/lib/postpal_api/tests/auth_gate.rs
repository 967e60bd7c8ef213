//! Router-level tests for the authorization gate.
//!
//! The pool is built lazily and never connected — every path asserted here
//! resolves before any database work.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use postpal_api::config::ApiConfig;
use postpal_api::{AppState, router};
use postpal_core::models::auth::TokenClaims;
use tower::ServiceExt;
use uuid::Uuid;

const JWT_SECRET: &str = "test-secret";

fn test_app() -> Router {
    let pool = sqlx::PgPool::connect_lazy("postgres://localhost:5432/postpal_test")
        .expect("lazy pool");
    let state = AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            pg_connection_url: "postgres://localhost:5432/postpal_test".into(),
            jwt_secret: JWT_SECRET.into(),
        },
    };
    router(state)
}

async fn get_protected(app: Router, auth_header: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri("/protected-resource");
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let resp = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .expect("request");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse JSON");
    (status, json)
}

#[tokio::test]
async fn missing_authorization_header_is_401() {
    let (status, body) = get_protected(test_app(), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let (status, body) = get_protected(test_app(), Some("Token abc")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Malformed token");
}

#[tokio::test]
async fn garbage_token_is_401() {
    let (status, body) = get_protected(test_app(), Some("Bearer garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    let token =
        postpal_core::auth::jwt::issue_token(&Uuid::new_v4().to_string(), b"other-secret")
            .unwrap();
    let (status, body) = get_protected(test_app(), Some(&format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn expired_token_is_401_with_expiry_message() {
    // Validly signed, expired ten seconds ago.
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 10,
        iat: now - 3600,
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, body) = get_protected(test_app(), Some(&format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token has expired");
}

#[tokio::test]
async fn valid_token_reaches_the_handler_with_its_identity() {
    let user_id = Uuid::new_v4();
    let token = postpal_core::auth::jwt::issue_token(&user_id.to_string(), JWT_SECRET.as_bytes())
        .unwrap();

    let (status, body) = get_protected(test_app(), Some(&format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Access granted");
    assert_eq!(body["userId"], user_id.to_string());
}

#[tokio::test]
async fn token_with_non_uuid_subject_is_401() {
    let token = postpal_core::auth::jwt::issue_token("not-a-uuid", JWT_SECRET.as_bytes()).unwrap();
    let (status, body) = get_protected(test_app(), Some(&format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}
