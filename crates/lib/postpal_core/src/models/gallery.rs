//! Gallery domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Image row as stored: the payload stays base64-encoded, exactly as
/// received inside the client's data URL.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub data: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}
