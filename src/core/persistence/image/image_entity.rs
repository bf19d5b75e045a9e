use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Uploaded photo, optionally attached to a land listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ImageEntity {
    pub id: i64,
    pub land_id: Option<i64>,
    /// Path under MEDIA_ROOT.
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}
