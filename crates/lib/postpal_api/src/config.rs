//! API server configuration.

use postpal_core::auth::jwt::resolve_jwt_secret;

/// Configuration for the API server. Read once at startup and immutable
/// afterwards; shared with every request via `AppState`.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default                              |
    /// |----------------|--------------------------------------|
    /// | `BIND_ADDR`    | `0.0.0.0:8000`                       |
    /// | `DATABASE_URL` | `postgres://localhost:5432/postpal`  |
    /// | `JWT_SECRET`   | generated & persisted to file        |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/postpal".into()),
            jwt_secret: resolve_jwt_secret(),
        }
    }
}
