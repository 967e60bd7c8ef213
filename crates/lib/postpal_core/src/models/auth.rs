//! Authentication domain models.
//!
//! These are internal domain models, distinct from the API request/response
//! types (which carry `#[serde(rename)]` for camelCase etc.).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain user, without the password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub score: i64,
}

/// Credential row used by the login flow: user ID plus stored hash.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: Uuid,
    pub password_hash: String,
}

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
